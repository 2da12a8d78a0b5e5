use wordfreq_app::platform::app::main_with;
use wordfreq_app::Variant;

fn main() -> anyhow::Result<()> {
    main_with(Variant::Presence)
}
