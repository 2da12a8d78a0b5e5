use std::fmt;

/// Classic 32-bit string hash functions, compared by the distribution report.
///
/// All functions treat input bytes as unsigned and use wrapping arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// The Java `String::hashCode` recurrence, `h = 31 * h + b`.
    H31,
    /// From ejb's hsearch, reduced modulo a prime.
    Ejb,
    /// Bob Jenkins' one-at-a-time hash.
    Oat,
    /// FNV-1, 32-bit.
    Fnv32,
    /// Bernstein's hash, xor variant.
    Djb33,
    /// Bob Jenkins' lookup2 over 12-byte blocks, seeded with 42.
    Jen,
    /// The ELF object file symbol hash.
    Elf,
}

impl HashKind {
    pub const ALL: [HashKind; 7] = [
        HashKind::H31,
        HashKind::Ejb,
        HashKind::Oat,
        HashKind::Fnv32,
        HashKind::Djb33,
        HashKind::Jen,
        HashKind::Elf,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HashKind::H31 => "h31",
            HashKind::Ejb => "ejb",
            HashKind::Oat => "oat",
            HashKind::Fnv32 => "fnv32",
            HashKind::Djb33 => "djb33",
            HashKind::Jen => "jen",
            HashKind::Elf => "elf",
        }
    }

    pub fn hash(self, bytes: &[u8]) -> u32 {
        match self {
            HashKind::H31 => h31(bytes),
            HashKind::Ejb => ejb(bytes),
            HashKind::Oat => oat(bytes),
            HashKind::Fnv32 => fnv32(bytes),
            HashKind::Djb33 => djb33(bytes),
            HashKind::Jen => jen(bytes),
            HashKind::Elf => elf(bytes),
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn h31(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |h, &b| h.wrapping_mul(31).wrapping_add(u32::from(b)))
}

fn ejb(bytes: &[u8]) -> u32 {
    const PRIME1: u32 = 37;
    const PRIME2: u32 = 1_048_583;
    let h = bytes.iter().fold(0u32, |h, &b| {
        h.wrapping_mul(PRIME1) ^ u32::from(b).wrapping_sub(u32::from(b' '))
    });
    h % PRIME2
}

fn oat(bytes: &[u8]) -> u32 {
    let mut h = bytes.iter().fold(0u32, |mut h, &b| {
        h = h.wrapping_add(u32::from(b));
        h = h.wrapping_add(h << 10);
        h ^ (h >> 6)
    });
    h = h.wrapping_add(h << 3);
    h ^= h >> 11;
    h.wrapping_add(h << 15)
}

fn fnv32(bytes: &[u8]) -> u32 {
    const FNV_32_PRIME: u32 = 0x0100_0193;
    const FNV_32_OFFSET: u32 = 0x811c_9dc5;
    bytes
        .iter()
        .fold(FNV_32_OFFSET, |h, &b| h.wrapping_mul(FNV_32_PRIME) ^ u32::from(b))
}

fn djb33(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(5381u32, |h, &b| h.wrapping_mul(33) ^ u32::from(b))
}

fn mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    const ROUNDS: [(u32, u32, u32); 3] = [(13, 8, 13), (12, 16, 5), (3, 10, 15)];
    for (ra, rb, rc) in ROUNDS {
        *a = a.wrapping_sub(*b).wrapping_sub(*c) ^ (*c >> ra);
        *b = b.wrapping_sub(*c).wrapping_sub(*a) ^ (*a << rb);
        *c = c.wrapping_sub(*a).wrapping_sub(*b) ^ (*b >> rc);
    }
}

fn le_word(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn jen(bytes: &[u8]) -> u32 {
    const GOLDEN_RATIO: u32 = 0x9e37_79b9;
    const SEED: u32 = 42;
    let (mut a, mut b, mut c) = (GOLDEN_RATIO, GOLDEN_RATIO, SEED);

    let mut blocks = bytes.chunks_exact(12);
    for block in &mut blocks {
        a = a.wrapping_add(le_word(&block[0..4]));
        b = b.wrapping_add(le_word(&block[4..8]));
        c = c.wrapping_add(le_word(&block[8..12]));
        mix(&mut a, &mut b, &mut c);
    }

    // The low byte of `c` holds the length, so tail bytes 8..=10 start one byte up.
    c = c.wrapping_add(bytes.len() as u32);
    for (i, &byte) in blocks.remainder().iter().enumerate() {
        let byte = u32::from(byte);
        match i {
            0..=3 => a = a.wrapping_add(byte << (8 * i)),
            4..=7 => b = b.wrapping_add(byte << (8 * (i - 4))),
            _ => c = c.wrapping_add(byte << (8 * (i - 7))),
        }
    }
    mix(&mut a, &mut b, &mut c);
    c
}

fn elf(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |h, &b| {
        let h = (h << 4).wrapping_add(u32::from(b));
        let high = h & 0xf000_0000;
        (h ^ (high >> 24)) & !high
    })
}
