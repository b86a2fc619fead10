//! Fixed digit fixtures.

/// The first 101 digits of π, leading `3` included.
pub const PI_DIGITS: &str = "3\
1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

/// Convert ASCII decimal text into raw digit values.
///
/// Panics on non-digit characters; fixture input only.
pub fn digits_of(text: &str) -> Vec<u8> {
    text.bytes()
        .map(|b| {
            assert!(b.is_ascii_digit(), "non-digit {:?} in fixture", b as char);
            b - b'0'
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi_fixture_length() {
        assert_eq!(PI_DIGITS.len(), 101);
        assert_eq!(&digits_of(PI_DIGITS)[..5], &[3, 1, 4, 1, 5]);
    }
}
