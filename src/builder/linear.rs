use tracing::debug;

use crate::common::{
    checksum::{ean_check, isbn_check, upc_check},
    error::{EanError, EanResult},
    metadata::{NumberSystem, Symbology, WidthClass},
    parity::{ean13_parity, ean2_parity, ean5_parity, upce_parity},
    pattern::{draw_addon, draw_ean13, draw_upca, draw_upce, ModulePattern},
    upce::expand,
};

// Linear symbol
//------------------------------------------------------------------------------

/// Primary symbol drawn for one request, before any add-on.
#[derive(Debug, Clone)]
pub(crate) struct Linear {
    pub pattern: ModulePattern,
    pub text: String,
    pub class: Option<WidthClass>,
}

impl Linear {
    fn new((pattern, text): (ModulePattern, String), class: Option<WidthClass>) -> Self {
        Self { pattern, text, class }
    }
}

/// Picks the symbology path from the requested variant and the normalized
/// primary length.
pub(crate) fn draw_primary(primary: &str, sym: Symbology) -> EanResult<Linear> {
    let len = primary.len();
    let composite = |class| sym.is_composite().then_some(class);
    debug!(symbology = ?sym, primary, len, "Dispatching");

    let linear = match sym {
        Symbology::Ean | Symbology::EanChk => match len {
            2 | 5 => Linear::new(bare_addon(primary), None),
            7 | 8 => Linear::new(ean8(primary)?, None),
            12 | 13 => Linear::new(ean13(primary)?, None),
            _ => return Err(EanError::wrong_length(286, "Input wrong length")),
        },
        Symbology::EanCc => match len {
            7 => Linear::new(ean8(primary)?, composite(WidthClass::Ean8)),
            12 | 13 => Linear::new(ean13(primary)?, composite(WidthClass::Ean13)),
            _ => return Err(EanError::wrong_length(287, "Input wrong length")),
        },
        Symbology::UpcA | Symbology::UpcAChk => match len {
            11 | 12 => Linear::new(upca(primary)?, None),
            _ => return Err(EanError::wrong_length(288, "Input wrong length")),
        },
        Symbology::UpcACc => match len {
            11 | 12 => Linear::new(upca(primary)?, composite(WidthClass::Ean13)),
            _ => return Err(EanError::wrong_length(289, "Input wrong length")),
        },
        Symbology::UpcE | Symbology::UpcEChk => {
            let max_len = if sym.has_check_digit() { 8 } else { 7 };
            if !(6..=max_len).contains(&len) {
                return Err(EanError::wrong_length(290, "Input wrong length"));
            }
            Linear::new(upce(primary, sym)?, None)
        }
        Symbology::UpcECc => match len {
            6 | 7 => Linear::new(upce(primary, sym)?, composite(WidthClass::UpcE)),
            _ => return Err(EanError::wrong_length(291, "Input wrong length")),
        },
        Symbology::Isbn => Linear::new(isbn(primary)?, None),
    };

    Ok(linear)
}

/// Appends the add-on after a primary symbol, `gap` modules away.
pub(crate) fn append_addon(linear: &mut Linear, addon: &str, gap: u8) -> EanResult<()> {
    let parity = match addon.len() {
        0 => return Ok(()),
        2 => ean2_parity(addon),
        5 => ean5_parity(addon),
        _ => return Err(EanError::wrong_length(292, "Add-on input wrong length")),
    };
    draw_addon(&mut linear.pattern, addon, parity, Some(gap));
    linear.text.push('+');
    linear.text.push_str(addon);
    Ok(())
}

/// Completes `digits` with its check digit, or validates the supplied one.
/// `data_len` is the length without check digit.
fn complete_check(
    digits: &str,
    data_len: usize,
    check: fn(&str) -> char,
    err: EanError,
) -> EanResult<String> {
    let expected = check(&digits[..data_len]);
    if digits.len() == data_len {
        return Ok(format!("{digits}{expected}"));
    }

    let supplied = digits[data_len..].chars().next();
    if supplied != Some(expected) {
        debug!(digits, ?supplied, %expected, "Check digit mismatch");
        return Err(err);
    }
    Ok(digits.to_string())
}

// UPC-A
//------------------------------------------------------------------------------

fn upca(digits: &str) -> EanResult<(ModulePattern, String)> {
    let gtin = complete_check(
        digits,
        11,
        upc_check,
        EanError::invalid_check(270, "Invalid check digit"),
    )?;
    debug!(source = digits, %gtin, "UPC-A");
    Ok((draw_upca(&gtin), gtin))
}

// EAN-8
//------------------------------------------------------------------------------

fn ean8(digits: &str) -> EanResult<(ModulePattern, String)> {
    let gtin =
        complete_check(digits, 7, upc_check, EanError::invalid_check(276, "Invalid check digit"))?;
    debug!(source = digits, %gtin, "EAN-8");
    Ok((draw_upca(&gtin), gtin))
}

// EAN-13
//------------------------------------------------------------------------------

fn ean13(digits: &str) -> EanResult<(ModulePattern, String)> {
    let gtin =
        complete_check(digits, 12, ean_check, EanError::invalid_check(275, "Invalid check digit"))?;
    debug!(source = digits, %gtin, "EAN-13");
    let parity = ean13_parity(gtin.as_bytes()[0]);
    Ok((draw_ean13(&gtin, parity), gtin))
}

// EAN-2/EAN-5 on their own
//------------------------------------------------------------------------------

fn bare_addon(digits: &str) -> (ModulePattern, String) {
    let parity = if digits.len() == 2 { ean2_parity(digits) } else { ean5_parity(digits) };
    let mut pattern = ModulePattern::new();
    draw_addon(&mut pattern, digits, parity, None);
    (pattern, digits.to_string())
}

// UPC-E
//------------------------------------------------------------------------------

fn upce(digits: &str, sym: Symbology) -> EanResult<(ModulePattern, String)> {
    let explicit_system = digits.len() == 8 || (!sym.has_check_digit() && digits.len() == 7);

    let (number_system, rest) = if explicit_system {
        let (first, rest) = digits.split_at(1);
        let ns = first.chars().next().and_then(NumberSystem::from_char).unwrap_or_else(|| {
            tracing::warn!(source = digits, "Unsupported UPC-E number system, using 0");
            NumberSystem::Zero
        });
        (ns, rest)
    } else {
        (NumberSystem::Zero, digits)
    };
    let (code, supplied) = rest.split_at(6);

    let expansion = expand(code, number_system)?;
    let check_digit = expansion.check_digit();
    if sym.has_check_digit() && supplied.chars().next() != Some(check_digit) {
        debug!(
            source = digits,
            equivalent = expansion.equivalent(),
            %check_digit,
            "UPC-E check digit mismatch"
        );
        return Err(EanError::invalid_check(274, "Invalid check digit"));
    }

    let text = format!("{}{code}{check_digit}", number_system.to_char());
    debug!(source = digits, equivalent = expansion.equivalent(), %text, "UPC-E");

    let parity = upce_parity(check_digit, number_system);
    Ok((draw_upce(code, parity), text))
}

// ISBN
//------------------------------------------------------------------------------

/// ISBN-13, ISBN-10 or 9-digit SBN, drawn as the equivalent EAN-13.
fn isbn(digits: &str) -> EanResult<(ModulePattern, String)> {
    let misplaced_x = |allowed_last: bool| {
        let body = if allowed_last { &digits[..digits.len() - 1] } else { digits };
        body.contains('X')
    };

    let gtin12 = match digits.len() {
        13 => {
            if misplaced_x(false) {
                return Err(EanError::invalid_char(277, "Invalid characters in input"));
            }
            if !(digits.starts_with("978") || digits.starts_with("979")) {
                return Err(EanError::invalid_data(279, "Invalid ISBN"));
            }
            let check_digit = ean_check(&digits[..12]);
            if !digits.ends_with(check_digit) {
                debug!(source = digits, %check_digit, "ISBN check digit mismatch");
                return Err(EanError::invalid_check(280, "Incorrect ISBN check"));
            }
            digits[..12].to_string()
        }
        9 | 10 => {
            if misplaced_x(true) {
                return Err(EanError::invalid_char(277, "Invalid characters in input"));
            }
            let sbn = digits.len() == 9;
            let isbn10 = if sbn { format!("0{digits}") } else { digits.to_string() };
            let check_digit = isbn_check(&isbn10[..9]);
            if !isbn10.ends_with(check_digit) {
                debug!(source = digits, %check_digit, "ISBN-10/SBN check digit mismatch");
                let msg = if sbn { "Incorrect SBN check" } else { "Incorrect ISBN check" };
                return Err(EanError::invalid_check(281, msg));
            }
            format!("978{}", &isbn10[..9])
        }
        _ => return Err(EanError::wrong_length(278, "Input wrong length")),
    };

    ean13(&gtin12)
}

#[cfg(test)]
mod linear_tests {
    use test_case::test_case;

    use super::{append_addon, draw_primary, isbn, upce};
    use crate::common::{
        error::ErrorKind,
        metadata::{Symbology, WidthClass},
    };

    #[test_case("03600029145", Symbology::UpcA, "036000291452", 95)]
    #[test_case("036000291452", Symbology::UpcAChk, "036000291452", 95)]
    #[test_case("9638507", Symbology::Ean, "96385074", 67)]
    #[test_case("96385074", Symbology::EanChk, "96385074", 67)]
    #[test_case("400638133393", Symbology::Ean, "4006381333931", 95)]
    #[test_case("12", Symbology::Ean, "12", 20)]
    #[test_case("12345", Symbology::EanChk, "12345", 47)]
    #[test_case("123450", Symbology::UpcE, "01234505", 51)]
    fn test_draw_primary(primary: &str, sym: Symbology, text: &str, width: usize) {
        let linear = draw_primary(primary, sym).unwrap();
        assert_eq!(linear.text, text);
        assert_eq!(linear.pattern.width(), width);
        assert_eq!(linear.class, None);
    }

    #[test_case("0000123", Symbology::EanCc, WidthClass::Ean8)]
    #[test_case("400638133393", Symbology::EanCc, WidthClass::Ean13)]
    #[test_case("03600029145", Symbology::UpcACc, WidthClass::Ean13)]
    #[test_case("123450", Symbology::UpcECc, WidthClass::UpcE)]
    fn test_composite_class(primary: &str, sym: Symbology, class: WidthClass) {
        assert_eq!(draw_primary(primary, sym).unwrap().class, Some(class));
    }

    #[test_case("123", Symbology::Ean, 286)]
    #[test_case("12345", Symbology::EanCc, 287)]
    #[test_case("1234567890123", Symbology::UpcA, 288)]
    #[test_case("1234567890123", Symbology::UpcACc, 289)]
    #[test_case("12345678", Symbology::UpcE, 290)]
    #[test_case("12345678", Symbology::UpcECc, 291)]
    #[test_case("12345678901", Symbology::Isbn, 278)]
    fn test_wrong_length(primary: &str, sym: Symbology, code: u16) {
        let err = draw_primary(primary, sym).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongLength);
        assert_eq!(err.code(), code);
    }

    #[test_case("036000291453", Symbology::UpcA, 270)]
    #[test_case("96385075", Symbology::EanChk, 276)]
    #[test_case("4006381333932", Symbology::Ean, 275)]
    #[test_case("01234506", Symbology::UpcEChk, 274)]
    fn test_invalid_check(primary: &str, sym: Symbology, code: u16) {
        let err = draw_primary(primary, sym).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCheckDigit);
        assert_eq!(err.code(), code);
    }

    #[test_case("0123450", Symbology::UpcE, "01234505")]
    #[test_case("1123450", Symbology::UpcE, "11234502")]
    #[test_case("5123450", Symbology::UpcE, "01234505")]
    #[test_case("1234505", Symbology::UpcEChk, "01234505")]
    #[test_case("01234505", Symbology::UpcEChk, "01234505")]
    fn test_upce_text(digits: &str, sym: Symbology, text: &str) {
        let (_, hrt) = upce(digits, sym).unwrap();
        assert_eq!(hrt, text);
    }

    #[test_case("019501109X", 281)]
    #[test_case("01950110X0", 277)]
    #[test_case("978019501109X", 277)]
    #[test_case("9770195011090", 279)]
    #[test_case("9780195011099", 280)]
    #[test_case("030640611", 281)]
    fn test_isbn_errors(digits: &str, code: u16) {
        assert_eq!(isbn(digits).unwrap_err().code(), code);
    }

    #[test_case("0195011090", "9780195011098")]
    #[test_case("9780195011098", "9780195011098")]
    #[test_case("080442957X", "9780804429573")]
    #[test_case("306406152", "9780306406157")]
    fn test_isbn(digits: &str, text: &str) {
        let (pattern, hrt) = isbn(digits).unwrap();
        assert_eq!(hrt, text);
        assert_eq!(pattern.width(), 95);
    }

    #[test]
    fn test_sbn_message() {
        let err = isbn("030640611").unwrap_err();
        assert_eq!(err.message(), "Incorrect SBN check");
        let err = isbn("0306406153").unwrap_err();
        assert_eq!(err.message(), "Incorrect ISBN check");
        assert_eq!(err.code(), 281);
    }

    #[test]
    fn test_append_addon() {
        let mut linear = draw_primary("03600029145", Symbology::UpcA).unwrap();
        append_addon(&mut linear, "12", 9).unwrap();
        assert_eq!(linear.text, "036000291452+12");
        assert_eq!(linear.pattern.width(), 95 + 9 + 20);

        let err = append_addon(&mut linear, "123", 9).unwrap_err();
        assert_eq!(err.code(), 292);
    }
}
