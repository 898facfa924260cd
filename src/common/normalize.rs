use super::error::{EanError, EanResult};
use super::metadata::Symbology;

pub const MAX_INPUT_LEN: usize = 19;
pub const MAX_PRIMARY_LEN: usize = 13;
pub const MAX_ADDON_LEN: usize = 5;

const ADDON_DELIMITER: u8 = b'+';

// Normalized input
//------------------------------------------------------------------------------

/// Input split into primary and add-on parts, each left-padded with zeros to
/// the canonical length for the requested variant.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NormalizedInput {
    primary: String,
    addon: String,
    with_addon: bool,
}

impl NormalizedInput {
    fn new(primary: String, addon: String, with_addon: bool) -> Self {
        debug_assert!(primary.len() <= MAX_PRIMARY_LEN, "Primary part too long: {primary}");
        debug_assert!(matches!(addon.len(), 0 | 2 | 5), "Add-on has odd length: {addon}");
        Self { primary, addon, with_addon }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Empty when no add-on digits were supplied.
    pub fn addon(&self) -> &str {
        &self.addon
    }

    /// Whether the raw input carried an add-on delimiter, even with nothing after it.
    pub fn with_addon(&self) -> bool {
        self.with_addon
    }
}

// Pad rules
//------------------------------------------------------------------------------

/// Parts no longer than `upto` are padded to `target`. Rules are tried in
/// order; a part longer than every `upto` is left untouched.
#[derive(Debug, Clone, Copy)]
struct PadRule {
    upto: usize,
    target: usize,
}

const fn rule(upto: usize, target: usize) -> PadRule {
    PadRule { upto, target }
}

const EAN_BARE: &[PadRule] = &[rule(2, 2), rule(5, 5), rule(7, 7), rule(12, 12)];
const EAN: &[PadRule] = &[rule(7, 7), rule(12, 12)];
const EAN_CHK_BARE: &[PadRule] = &[rule(2, 2), rule(5, 5), rule(8, 8), rule(13, 13)];
const EAN_CHK: &[PadRule] = &[rule(8, 8), rule(13, 13)];
const UPCA: &[PadRule] = &[rule(11, 11)];
const UPCA_CHK: &[PadRule] = &[rule(12, 12)];
const UPCE: &[PadRule] = &[rule(6, 6), rule(7, 7)];
const UPCE_CHK: &[PadRule] = &[rule(7, 7), rule(8, 8)];
const ISBN: &[PadRule] = &[rule(9, 9)];
const ADDON: &[PadRule] = &[rule(0, 0), rule(2, 2), rule(5, 5)];

/// Bare EAN-2/EAN-5 lengths are only reachable when no add-on digits follow,
/// and never for the composite variant.
fn primary_rules(sym: Symbology, bare: bool) -> &'static [PadRule] {
    match sym {
        Symbology::Ean if bare => EAN_BARE,
        Symbology::Ean | Symbology::EanCc => EAN,
        Symbology::EanChk if bare => EAN_CHK_BARE,
        Symbology::EanChk => EAN_CHK,
        Symbology::UpcA | Symbology::UpcACc => UPCA,
        Symbology::UpcAChk => UPCA_CHK,
        Symbology::UpcE | Symbology::UpcECc => UPCE,
        Symbology::UpcEChk => UPCE_CHK,
        Symbology::Isbn => ISBN,
    }
}

fn zero_pad(part: &str, rules: &[PadRule]) -> String {
    let target = rules.iter().find(|r| part.len() <= r.upto).map_or(part.len(), |r| r.target);
    format!("{part:0>target$}")
}

// Normalizer
//------------------------------------------------------------------------------

fn check_alphabet(data: &[u8], sym: Symbology) -> EanResult<()> {
    let (extra, code): (&[u8], u16) = match sym {
        Symbology::Isbn => (b"Xx+", 285),
        _ => (b"+", 284),
    };
    if data.iter().all(|b| b.is_ascii_digit() || extra.contains(b)) {
        Ok(())
    } else {
        Err(EanError::invalid_char(code, "Invalid characters in data"))
    }
}

/// Splits `data` on the first `+`, validates both parts and pads them to the
/// canonical lengths for `sym`.
pub fn normalize(data: &[u8], sym: Symbology) -> EanResult<NormalizedInput> {
    if data.len() > MAX_INPUT_LEN {
        return Err(EanError::wrong_length(283, "Input too long"));
    }
    check_alphabet(data, sym)?;

    let (primary, addon, with_addon) = match data.iter().position(|&b| b == ADDON_DELIMITER) {
        Some(i) => (&data[..i], &data[i + 1..], true),
        None => (data, &data[data.len()..], false),
    };
    if addon.iter().any(|b| !b.is_ascii_digit()) {
        return Err(EanError::invalid_char(284, "Invalid characters in add-on"));
    }
    if primary.len() > MAX_PRIMARY_LEN || addon.len() > MAX_ADDON_LEN {
        return Err(EanError::wrong_length(294, "Input too long"));
    }

    // Only ASCII is left at this point
    let primary = String::from_utf8_lossy(primary).to_ascii_uppercase();
    let addon = String::from_utf8_lossy(addon).into_owned();

    let primary = zero_pad(&primary, primary_rules(sym, addon.is_empty()));
    let addon = zero_pad(&addon, ADDON);

    Ok(NormalizedInput::new(primary, addon, with_addon))
}

#[cfg(test)]
mod normalize_tests {
    use test_case::test_case;

    use super::normalize;
    use crate::common::{error::ErrorKind, metadata::Symbology};

    #[test_case("1", Symbology::Ean, "01")]
    #[test_case("123", Symbology::Ean, "00123")]
    #[test_case("123456", Symbology::Ean, "0123456")]
    #[test_case("12345678", Symbology::Ean, "000012345678")]
    #[test_case("1234567890123", Symbology::Ean, "1234567890123")]
    #[test_case("123", Symbology::EanChk, "00123")]
    #[test_case("1234567", Symbology::EanChk, "01234567")]
    #[test_case("123456789", Symbology::EanChk, "0000123456789")]
    #[test_case("123", Symbology::EanCc, "0000123")]
    #[test_case("12345", Symbology::UpcA, "00000012345")]
    #[test_case("036000291452", Symbology::UpcA, "036000291452")]
    #[test_case("12345", Symbology::UpcAChk, "000000012345")]
    #[test_case("1234", Symbology::UpcE, "001234")]
    #[test_case("0123450", Symbology::UpcE, "0123450")]
    #[test_case("1234", Symbology::UpcEChk, "0001234")]
    #[test_case("12345", Symbology::Isbn, "000012345")]
    #[test_case("080442957x", Symbology::Isbn, "080442957X")]
    fn test_primary_padding(data: &str, sym: Symbology, exp: &str) {
        let input = normalize(data.as_bytes(), sym).unwrap();
        assert_eq!(input.primary(), exp);
        assert_eq!(input.addon(), "");
        assert!(!input.with_addon());
    }

    #[test_case("123+1", Symbology::Ean, "0000123", "01")]
    #[test_case("123+123", Symbology::EanChk, "00000123", "00123")]
    #[test_case("123456789012+12345", Symbology::Ean, "123456789012", "12345")]
    #[test_case("1+", Symbology::Ean, "01", "")]
    fn test_addon_padding(data: &str, sym: Symbology, primary: &str, addon: &str) {
        let input = normalize(data.as_bytes(), sym).unwrap();
        assert_eq!(input.primary(), primary);
        assert_eq!(input.addon(), addon);
        assert!(input.with_addon());
    }

    #[test_case("12345678901234567890", Symbology::Ean, 283)]
    #[test_case("12345678901234", Symbology::UpcA, 294)]
    #[test_case("123+123456", Symbology::Ean, 294)]
    fn test_wrong_length(data: &str, sym: Symbology, code: u16) {
        let err = normalize(data.as_bytes(), sym).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongLength);
        assert_eq!(err.code(), code);
    }

    #[test_case("12A45", Symbology::Ean, 284)]
    #[test_case("12345X", Symbology::UpcA, 284)]
    #[test_case("123+1+2", Symbology::Ean, 284)]
    #[test_case("12-45", Symbology::Isbn, 285)]
    #[test_case("123456789+1X", Symbology::Isbn, 284)]
    fn test_invalid_character(data: &str, sym: Symbology, code: u16) {
        let err = normalize(data.as_bytes(), sym).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
        assert_eq!(err.code(), code);
    }

    #[test]
    fn test_ceiling_checked_before_alphabet() {
        let err = normalize(b"ABCDEFGHIJKLMNOPQRST", Symbology::Ean).unwrap_err();
        assert_eq!(err.code(), 283);
    }
}
