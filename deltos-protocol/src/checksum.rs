//! Additive checksum over packet fields.
//!
//! The checksum is the sum of all byte values modulo 256, computed over
//! the TYPE text followed directly by the DATA text with no separator.
//! Both ends must agree on that exact byte order. The checksum is
//! advisory only - it catches line corruption, nothing adversarial.

/// Sum of byte values modulo 256.
pub fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// Checksum over a packet's TYPE and DATA fields, in that order.
pub fn checksum_over(type_name: &str, data: &str) -> u8 {
    type_name
        .bytes()
        .chain(data.bytes())
        .fold(0u8, |sum, b| sum.wrapping_add(b))
}

/// Verify a received checksum against the TYPE and DATA fields.
///
/// `expected` is the decimal value claimed by the packet; values outside
/// 0-255 can never match.
pub fn verify(type_name: &str, data: &str, expected: u32) -> bool {
    u32::from(checksum_over(type_name, data)) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_sum_mod_256() {
        assert_eq!(checksum(b""), 0);
        assert_eq!(checksum(b"A"), 65);
        assert_eq!(checksum(&[200, 100]), 44); // 300 % 256
    }

    #[test]
    fn test_checksum_over_is_type_then_data() {
        assert_eq!(checksum_over("TASKS", "1.Work"), checksum(b"TASKS1.Work"));
        assert_eq!(checksum_over("", ""), 0);
    }

    #[test]
    fn test_verify_roundtrip() {
        let value = checksum_over("TASKS", "1.Work");
        assert!(verify("TASKS", "1.Work", u32::from(value)));
    }

    #[test]
    fn test_verify_rejects_corruption() {
        let value = u32::from(checksum_over("TASKS", "1.Work"));
        assert!(!verify("TASKS", "1.Wore", value));
        assert!(!verify("TASKS", "1.Work", value.wrapping_add(1)));
    }

    #[test]
    fn test_verify_rejects_out_of_range_claims() {
        // A claimed value above 255 never matches, even congruent mod 256.
        let value = u32::from(checksum_over("STATUS", "ok"));
        assert!(!verify("STATUS", "ok", value + 256));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn packet_built_with_own_checksum_always_verifies(
                type_name in "[A-Z]{1,10}",
                data in "[ -{]*",
            ) {
                let value = checksum_over(&type_name, &data);
                prop_assert!(verify(&type_name, &data, u32::from(value)));
            }
        }
    }
}
