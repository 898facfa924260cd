use std::ops::RangeInclusive;

use super::error::{EanError, EanResult, ErrorKind};

// Symbology
//------------------------------------------------------------------------------

/// Requested symbology variant.
///
/// The `Ean*` variants cover EAN-13, EAN-8 and the bare EAN-2/EAN-5 add-ons;
/// which one is drawn depends on the normalized length of the input.
/// `*Chk` variants expect the caller to supply the check digit and `*Cc`
/// variants host a 2D composite component above the linear symbol.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Symbology {
    Ean,
    EanChk,
    EanCc,
    UpcA,
    UpcAChk,
    UpcACc,
    UpcE,
    UpcEChk,
    UpcECc,
    Isbn,
}

impl Symbology {
    pub const ALL: [Symbology; 10] = [
        Self::Ean,
        Self::EanChk,
        Self::EanCc,
        Self::UpcA,
        Self::UpcAChk,
        Self::UpcACc,
        Self::UpcE,
        Self::UpcEChk,
        Self::UpcECc,
        Self::Isbn,
    ];

    pub fn is_composite(self) -> bool {
        matches!(self, Self::EanCc | Self::UpcACc | Self::UpcECc)
    }

    pub fn has_check_digit(self) -> bool {
        matches!(self, Self::EanChk | Self::UpcAChk | Self::UpcEChk)
    }

    pub fn is_upca_class(self) -> bool {
        matches!(self, Self::UpcA | Self::UpcAChk | Self::UpcACc)
    }

    /// Variant expecting a caller-supplied check digit.
    pub fn with_check_digit(self) -> EanResult<Self> {
        match self {
            Self::Ean | Self::EanChk => Ok(Self::EanChk),
            Self::UpcA | Self::UpcAChk => Ok(Self::UpcAChk),
            Self::UpcE | Self::UpcEChk => Ok(Self::UpcEChk),
            _ => Err(EanError::new(
                ErrorKind::InvalidOption,
                293,
                "Check digit option not available for this symbology",
            )),
        }
    }

    /// Variant linked to a 2D composite component.
    pub fn with_composite(self) -> EanResult<Self> {
        match self {
            Self::Ean | Self::EanCc => Ok(Self::EanCc),
            Self::UpcA | Self::UpcACc => Ok(Self::UpcACc),
            Self::UpcE | Self::UpcECc => Ok(Self::UpcECc),
            _ => Err(EanError::new(
                ErrorKind::InvalidOption,
                293,
                "Composite option not available for this symbology",
            )),
        }
    }

    pub fn default_addon_gap(self) -> u8 {
        if self.is_upca_class() {
            9
        } else {
            7
        }
    }

    pub fn addon_gap_range(self) -> RangeInclusive<u8> {
        self.default_addon_gap()..=12
    }

    /// Resolves a caller override against the range allowed for this variant.
    pub fn addon_gap(self, requested: Option<u8>) -> u8 {
        match requested {
            Some(gap) if self.addon_gap_range().contains(&gap) => gap,
            Some(gap) => {
                tracing::warn!(
                    symbology = ?self,
                    gap,
                    "Add-on gap out of range, using default {}",
                    self.default_addon_gap()
                );
                self.default_addon_gap()
            }
            None => self.default_addon_gap(),
        }
    }
}

// Number system
//------------------------------------------------------------------------------

/// Number system digit of a UPC-E symbol, selecting one of two parity tables.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum NumberSystem {
    #[default]
    Zero,
    One,
}

impl NumberSystem {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }
}

// Width class
//------------------------------------------------------------------------------

/// Width class of the linear symbol under a composite component. Determines
/// the column of the right-hand separator module.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum WidthClass {
    Ean8,
    Ean13,
    UpcE,
}

impl WidthClass {
    pub const fn separator_col(self) -> usize {
        match self {
            Self::Ean8 => 67,
            Self::Ean13 => 95,
            Self::UpcE => 51,
        }
    }
}

// Encode options
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct EncodeOptions {
    /// White space between primary symbol and add-on, in modules.
    pub addon_gap: Option<u8>,
    pub check_digit: bool,
    pub composite: bool,
}

#[cfg(test)]
mod metadata_tests {
    use test_case::test_case;

    use super::{NumberSystem, Symbology};
    use crate::common::error::ErrorKind;

    #[test_case(Symbology::UpcA, None, 9)]
    #[test_case(Symbology::UpcA, Some(12), 12)]
    #[test_case(Symbology::UpcA, Some(8), 9)]
    #[test_case(Symbology::UpcACc, Some(7), 9)]
    #[test_case(Symbology::Ean, None, 7)]
    #[test_case(Symbology::Ean, Some(8), 8)]
    #[test_case(Symbology::UpcE, Some(13), 7)]
    #[test_case(Symbology::Isbn, Some(10), 10)]
    fn test_addon_gap(sym: Symbology, requested: Option<u8>, exp: u8) {
        assert_eq!(sym.addon_gap(requested), exp);
    }

    #[test]
    fn test_flag_variants() {
        assert_eq!(Symbology::UpcA.with_check_digit(), Ok(Symbology::UpcAChk));
        assert_eq!(Symbology::UpcE.with_composite(), Ok(Symbology::UpcECc));
        assert_eq!(Symbology::Ean.with_composite(), Ok(Symbology::EanCc));
        let err = Symbology::UpcACc.with_check_digit().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOption);
        assert!(Symbology::Isbn.with_composite().is_err());
    }

    #[test]
    fn test_flags() {
        let composite = Symbology::ALL.iter().filter(|s| s.is_composite()).count();
        let check = Symbology::ALL.iter().filter(|s| s.has_check_digit()).count();
        assert_eq!(composite, 3);
        assert_eq!(check, 3);
    }

    #[test]
    fn test_number_system() {
        assert_eq!(NumberSystem::from_char('1'), Some(NumberSystem::One));
        assert_eq!(NumberSystem::from_char('7'), None);
        assert_eq!(NumberSystem::Zero.to_char(), '0');
    }
}
