use super::checksum::upc_check;
use super::error::{EanError, EanResult};
use super::metadata::NumberSystem;

// UPC-E expansion
//------------------------------------------------------------------------------

/// UPC-A equivalent of a zero-suppressed UPC-E code.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UpceExpansion {
    number_system: NumberSystem,
    equivalent: String,
    emode: u8,
}

impl UpceExpansion {
    pub fn number_system(&self) -> NumberSystem {
        self.number_system
    }

    /// 11 digits: number system, 5 manufacturer digits, 5 product digits.
    pub fn equivalent(&self) -> &str {
        &self.equivalent
    }

    pub fn emode(&self) -> u8 {
        self.emode
    }

    pub fn check_digit(&self) -> char {
        upc_check(&self.equivalent)
    }
}

/// Expands a 6-digit UPC-E code (EN 797 Table 5). The last digit selects
/// where the manufacturer code ends and how many zeros were suppressed.
pub fn expand(code: &str, number_system: NumberSystem) -> EanResult<UpceExpansion> {
    let d = code.as_bytes();
    debug_assert!(d.len() == 6, "UPC-E code must have 6 digits: {code}");
    debug_assert!(d.iter().all(u8::is_ascii_digit), "UPC-E code must be numeric: {code}");

    let mut eq = [b'0'; 11];
    eq[0] = number_system.to_char() as u8;
    eq[1] = d[0];
    eq[2] = d[1];

    let emode = d[5];
    match emode {
        b'0'..=b'2' => {
            eq[3] = emode;
            eq[8..11].copy_from_slice(&d[2..5]);
        }
        b'3' => {
            // X3 shall not be 0, 1 or 2
            if matches!(d[2], b'0'..=b'2') {
                return Err(EanError::invalid_data(271, "Invalid UPC-E data"));
            }
            eq[3] = d[2];
            eq[9..11].copy_from_slice(&d[3..5]);
        }
        b'4' => {
            // X4 shall not be 0
            if d[3] == b'0' {
                return Err(EanError::invalid_data(272, "Invalid UPC-E data"));
            }
            eq[3..5].copy_from_slice(&d[2..4]);
            eq[10] = d[4];
        }
        _ => {
            // X5 shall not be 0
            if d[4] == b'0' {
                return Err(EanError::invalid_data(273, "Invalid UPC-E data"));
            }
            eq[3..6].copy_from_slice(&d[2..5]);
            eq[10] = emode;
        }
    }

    Ok(UpceExpansion {
        number_system,
        equivalent: eq.iter().map(|&b| char::from(b)).collect(),
        emode: emode - b'0',
    })
}

// UPC-E compression
//------------------------------------------------------------------------------

/// Zero-suppresses an 11-digit UPC-A code (without check digit) into its
/// number system and 6-digit UPC-E code. Returns `None` when the number system
/// is not 0 or 1 or the code has no zero-suppressed form.
pub fn compress(upca: &str) -> Option<(NumberSystem, String)> {
    let eq = upca.as_bytes();
    if eq.len() != 11 || !eq.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let number_system = NumberSystem::from_char(char::from(eq[0]))?;
    let zeros = |r: std::ops::Range<usize>| eq[r].iter().all(|&b| b == b'0');

    let code: Vec<u8> = if eq[3] <= b'2' && zeros(4..8) {
        [&eq[1..3], &eq[8..11], &eq[3..4]].concat()
    } else if zeros(4..9) {
        [&eq[1..4], &eq[9..11], &b"3"[..]].concat()
    } else if zeros(5..10) {
        [&eq[1..5], &eq[10..11], &b"4"[..]].concat()
    } else if zeros(6..10) && eq[10] >= b'5' {
        [&eq[1..6], &eq[10..11]].concat()
    } else {
        return None;
    };

    Some((number_system, code.into_iter().map(char::from).collect()))
}
