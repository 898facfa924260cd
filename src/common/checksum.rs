// Check digit algorithms
//------------------------------------------------------------------------------

fn digit_value(b: u8) -> u32 {
    debug_assert!(b.is_ascii_digit(), "Non-digit byte {b:#x} in checksum input");
    (b - b'0') as u32
}

fn mod10_check(sum: u32) -> char {
    let check = (10 - sum % 10) % 10;
    char::from(b'0' + check as u8)
}

/// UPC check digit: weight 3 on even indices, 1 on odd ones, counted from the
/// left. Used for UPC-A (11 digits), UPC-E equivalents and EAN-8 (7 digits).
pub fn upc_check(digits: &str) -> char {
    let sum = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| if i & 1 == 0 { 3 * digit_value(b) } else { digit_value(b) })
        .sum();
    mod10_check(sum)
}

/// EAN-13 check digit: weight 1 on even indices, 3 on odd ones.
pub fn ean_check(digits: &str) -> char {
    let sum = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| if i & 1 == 0 { digit_value(b) } else { 3 * digit_value(b) })
        .sum();
    mod10_check(sum)
}

/// ISBN-10 and SBN check character over the first 9 digits. Mod 11 with
/// positional weights 1..=9, a remainder of 10 being written as `X`.
pub fn isbn_check(digits: &str) -> char {
    debug_assert!(digits.len() == 9, "ISBN check expects 9 digits, got {}", digits.len());

    let sum: u32 = digits.bytes().zip(1..).map(|(b, w)| digit_value(b) * w).sum();
    match sum % 11 {
        10 => 'X',
        c => char::from(b'0' + c as u8),
    }
}

#[cfg(test)]
mod checksum_tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::{ean_check, isbn_check, upc_check};

    #[test_case("03600029145", '2')]
    #[test_case("01200000345", '5')]
    #[test_case("1234567", '0')]
    #[test_case("9638507", '4')]
    #[test_case("00000000000", '0')]
    fn test_upc_check(digits: &str, exp: char) {
        assert_eq!(upc_check(digits), exp);
    }

    #[test_case("978019501109", '8')]
    #[test_case("400638133393", '1')]
    #[test_case("501234567890", '0')]
    #[test_case("123456789012", '8')]
    fn test_ean_check(digits: &str, exp: char) {
        assert_eq!(ean_check(digits), exp);
    }

    #[test_case("019501109", '0')]
    #[test_case("030640615", '2')]
    #[test_case("080442957", 'X')]
    #[test_case("000000000", '0')]
    fn test_isbn_check(digits: &str, exp: char) {
        assert_eq!(isbn_check(digits), exp);
    }

    #[test]
    fn test_weightings_differ() {
        // Odd length inputs expose the opposite index parity of the two forms
        assert_eq!(upc_check("1"), '7');
        assert_eq!(ean_check("1"), '9');
        assert_eq!(upc_check("01"), '9');
        assert_eq!(ean_check("01"), '7');
    }

    proptest! {
        #[test]
        fn proptest_upc_matches_ean_with_leading_zero(digits in "[0-9]{11}") {
            let padded = format!("0{digits}");
            prop_assert_eq!(upc_check(&digits), ean_check(&padded));
        }

        #[test]
        fn proptest_upc_check_stable(digits in "[0-9]{11}") {
            let check = upc_check(&digits);
            prop_assert_eq!(check, upc_check(&digits));
            prop_assert!(check.is_ascii_digit());
        }
    }
}
