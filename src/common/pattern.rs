use super::parity::{ParityPattern, RepresentationSet};

// Representation tables (EN 797:1996 Table 1)
//------------------------------------------------------------------------------

/// Widths of sets A and C, space first
const EAN_SET_A: [&str; 10] =
    ["3211", "2221", "2122", "1411", "1132", "1231", "1114", "1312", "1213", "3112"];

/// Widths of set B, space first
const EAN_SET_B: [&str; 10] =
    ["1123", "1222", "2212", "1141", "2311", "1321", "4111", "2131", "3121", "2113"];

// Guards
//------------------------------------------------------------------------------

pub const START_GUARD: &str = "111";
pub const CENTER_GUARD: &str = "11111";
pub const STOP_GUARD: &str = "111";
pub const UPCE_STOP_GUARD: &str = "111111";
pub const ADDON_START_GUARD: &str = "112";
pub const ADDON_SEPARATOR: &str = "11";

/// Position of the centre guard in an EAN-13 digit string; the leading digit
/// is carried by the parity of the left half and not drawn.
const EAN13_HALF_WAY: usize = 7;

// Module pattern
//------------------------------------------------------------------------------

/// Run-length pattern of a linear symbol. Each character is a bar or space
/// width written as a hex digit, alternating bar/space starting with a bar.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ModulePattern(String);

impl ModulePattern {
    pub fn new() -> Self {
        Self(String::with_capacity(128))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Total number of modules covered by the pattern.
    pub fn width(&self) -> usize {
        self.runs().map(|w| w as usize).sum()
    }

    pub fn runs(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.chars().filter_map(|c| c.to_digit(16))
    }

    fn push_guard(&mut self, guard: &str) {
        self.0.push_str(guard);
    }

    fn push_digit(&mut self, digit: u8, set: RepresentationSet) {
        debug_assert!(digit.is_ascii_digit(), "Cannot encode {:?}", digit as char);

        let table = match set {
            RepresentationSet::A | RepresentationSet::C => &EAN_SET_A,
            RepresentationSet::B => &EAN_SET_B,
        };
        self.0.push_str(table[(digit - b'0') as usize]);
    }

    fn push_gap(&mut self, gap: u8) {
        debug_assert!((7..=12).contains(&gap), "Add-on gap out of range: {gap}");
        let c = char::from_digit(gap as u32, 16).map_or('7', |c| c.to_ascii_uppercase());
        self.0.push(c);
    }
}

// Assembly
//------------------------------------------------------------------------------

/// UPC-A and EAN-8 layout: every digit in set A (C on the right), centre
/// guard at the half-way index.
pub fn draw_upca(digits: &str) -> ModulePattern {
    let half_way = digits.len() / 2;
    let mut pattern = ModulePattern::new();

    pattern.push_guard(START_GUARD);
    for (i, d) in digits.bytes().enumerate() {
        if i == half_way {
            pattern.push_guard(CENTER_GUARD);
        }
        let set = if i < half_way { RepresentationSet::A } else { RepresentationSet::C };
        pattern.push_digit(d, set);
    }
    pattern.push_guard(STOP_GUARD);

    pattern
}

/// EAN-13 layout. The leading digit selects the parity of digits 2 to 6.
pub fn draw_ean13(gtin: &str, parity: ParityPattern) -> ModulePattern {
    debug_assert!(gtin.len() == 13, "EAN-13 expects 13 digits: {gtin}");

    let digits = gtin.as_bytes();
    let mut left = parity.sets();
    let mut pattern = ModulePattern::new();

    pattern.push_guard(START_GUARD);
    for (i, &d) in digits.iter().enumerate().skip(1) {
        if i == EAN13_HALF_WAY {
            pattern.push_guard(CENTER_GUARD);
        }
        let set = match i {
            1 => RepresentationSet::A,
            2..=6 => left.next().unwrap_or(RepresentationSet::A),
            _ => RepresentationSet::C,
        };
        pattern.push_digit(d, set);
    }
    pattern.push_guard(STOP_GUARD);

    pattern
}

/// UPC-E layout: six data digits, no centre guard and the long stop guard.
pub fn draw_upce(code: &str, parity: ParityPattern) -> ModulePattern {
    debug_assert!(code.len() == 6, "UPC-E expects 6 digits: {code}");

    let mut pattern = ModulePattern::new();
    pattern.push_guard(START_GUARD);
    for (d, set) in code.bytes().zip(parity.sets()) {
        pattern.push_digit(d, set);
    }
    pattern.push_guard(UPCE_STOP_GUARD);

    pattern
}

/// Appends an EAN-2/EAN-5 add-on. `gap` is the white space separating it from
/// a preceding primary symbol, `None` for a bare add-on.
pub fn draw_addon(pattern: &mut ModulePattern, addon: &str, parity: ParityPattern, gap: Option<u8>) {
    debug_assert!(addon.len() == parity.len(), "Parity does not cover add-on {addon}");

    if let Some(gap) = gap {
        pattern.push_gap(gap);
    }
    pattern.push_guard(ADDON_START_GUARD);

    let last = addon.len() - 1;
    for (i, (d, set)) in addon.bytes().zip(parity.sets()).enumerate() {
        pattern.push_digit(d, set);
        if i != last {
            pattern.push_guard(ADDON_SEPARATOR);
        }
    }
}
