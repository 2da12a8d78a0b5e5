//! Wordfreq core: pure tokenizing, counting and hashing over in-memory text.
mod chained;
mod hash;
mod presence;
mod table;
mod token;

pub use chained::{ChainStats, ChainedTable, BUCKET_COUNT};
pub use hash::HashKind;
pub use presence::{record_presence, WordSet};
pub use table::{count_frequencies, FrequencyTable};
pub use token::{is_delimiter, tokenize, WordList};
