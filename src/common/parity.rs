use super::metadata::NumberSystem;

// Representation set
//------------------------------------------------------------------------------

/// Digit representation set. Set C shares set A's widths and is used for the
/// right-hand half, after the centre guard.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum RepresentationSet {
    A,
    B,
    C,
}

// Parity tables (EN 797:1996)
//------------------------------------------------------------------------------

/// UPC-E number system 0 (EN Table 4)
const UPCE_PARITY_0: [&str; 10] = [
    "BBBAAA", "BBABAA", "BBAABA", "BBAAAB", "BABBAA", "BAABBA", "BAAABB", "BABABA", "BABAAB",
    "BAABAB",
];

/// UPC-E number system 1, the mirror of system 0
const UPCE_PARITY_1: [&str; 10] = [
    "AAABBB", "AABABB", "AABBAB", "AABBBA", "ABAABB", "ABBAAB", "ABBBAA", "ABABAB", "ABABBA",
    "ABBABA",
];

/// 2-digit add-on (EN Table 6)
const EAN2_PARITY: [&str; 4] = ["AA", "AB", "BA", "BB"];

/// 5-digit add-on (EN Table 7)
const EAN5_PARITY: [&str; 10] =
    ["BBAAA", "BABAA", "BAABA", "BAAAB", "ABBAA", "AABBA", "AAABB", "ABABA", "ABAAB", "AABAB"];

/// Left half of EAN-13 after its first (always A) digit, keyed on the leading
/// digit (EN Table 3)
const EAN13_PARITY: [&str; 10] =
    ["AAAAA", "ABABB", "ABBAB", "ABBBA", "BAABB", "BBAAB", "BBBAA", "BABAB", "BABBA", "BBABA"];

// Parity pattern
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct ParityPattern(&'static str);

impl ParityPattern {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sets(&self) -> impl Iterator<Item = RepresentationSet> {
        self.0.bytes().map(|b| match b {
            b'B' => RepresentationSet::B,
            _ => RepresentationSet::A,
        })
    }
}

fn value(b: u8) -> usize {
    debug_assert!(b.is_ascii_digit(), "Parity key must be numeric, got {b:#x}");
    (b - b'0') as usize
}

pub fn ean13_parity(leading: u8) -> ParityPattern {
    ParityPattern(EAN13_PARITY[value(leading)])
}

pub fn ean2_parity(addon: &str) -> ParityPattern {
    let d = addon.as_bytes();
    debug_assert!(d.len() == 2, "EAN-2 parity expects 2 digits: {addon}");
    ParityPattern(EAN2_PARITY[(10 * value(d[0]) + value(d[1])) % 4])
}

pub fn ean5_parity(addon: &str) -> ParityPattern {
    let d = addon.as_bytes();
    debug_assert!(d.len() == 5, "EAN-5 parity expects 5 digits: {addon}");
    let sum = 3 * (value(d[0]) + value(d[2]) + value(d[4])) + 9 * (value(d[1]) + value(d[3]));
    ParityPattern(EAN5_PARITY[sum % 10])
}

pub fn upce_parity(check_digit: char, number_system: NumberSystem) -> ParityPattern {
    let table = match number_system {
        NumberSystem::Zero => &UPCE_PARITY_0,
        NumberSystem::One => &UPCE_PARITY_1,
    };
    ParityPattern(table[value(check_digit as u8)])
}
