//! MAC address normalization.
//!
//! Handles any separator convention or none at all:
//! - Colon pairs: "aa:bb:cc:dd:ee:ff"
//! - Hyphen pairs: "AA-BB-CC-DD-EE-FF"
//! - Dotted quads: "aabb.ccdd.eeff"
//! - Surrounding noise: "  hw = AABBCCDDEEFF;  "
//!
//! Every non-hex character is dropped before the length check, so malformed
//! input is an ordinary outcome rather than an error.

use tracing::trace;

use macfmt_model::{FormattedMac, MAC_HEX_DIGITS, MacAddress, Normalization, hex_digits};

/// Normalize free-form text into the canonical renderings of a MAC address.
///
/// Returns [`Normalization::Empty`] for blank input and
/// [`Normalization::Invalid`] when the text does not hold exactly twelve hex
/// digits. The unseparated upper and lower forms are only included when the
/// input carried lowercase hex letters.
pub fn normalize(raw: &str) -> Normalization {
    if raw.trim().is_empty() {
        return Normalization::Empty;
    }

    let cleaned = hex_digits(raw);
    let digits = cleaned.len();
    if digits != MAC_HEX_DIGITS {
        trace!(digits, "input rejected");
        return Normalization::Invalid { digits };
    }

    let address = match MacAddress::from_hex_digits(&cleaned) {
        Ok(address) => address,
        Err(_) => return Normalization::Invalid { digits },
    };
    let include_plain = has_lowercase_digits(&cleaned);
    trace!(%address, include_plain, "input accepted");
    Normalization::Valid {
        formats: FormattedMac::new(address, include_plain),
    }
}

/// Check whether cleaned hex digits differ from their uppercase form.
pub fn has_lowercase_digits(cleaned: &str) -> bool {
    cleaned.chars().any(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use macfmt_model::{MacFormat, ValidationState};

    fn formats(raw: &str) -> FormattedMac {
        match normalize(raw) {
            Normalization::Valid { formats } => formats,
            other => panic!("expected valid result for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_uppercase_colon_input() {
        let result = formats("AA:BB:CC:DD:EE:FF");
        assert_eq!(result.get(MacFormat::Colon), Some("AA:BB:CC:DD:EE:FF"));
        assert_eq!(result.get(MacFormat::Hyphen), Some("AA-BB-CC-DD-EE-FF"));
        assert_eq!(result.get(MacFormat::Windows), Some("AABB-CCDD-EEFF"));
        assert_eq!(result.get(MacFormat::Dot), Some("AABB.CCDD.EEFF"));
        assert_eq!(result.get(MacFormat::Upper), None);
        assert_eq!(result.get(MacFormat::Lower), None);
    }

    #[test]
    fn test_lowercase_input_adds_plain_forms() {
        let result = formats("aabbccddeeff");
        assert_eq!(result.get(MacFormat::Colon), Some("AA:BB:CC:DD:EE:FF"));
        assert_eq!(result.get(MacFormat::Upper), Some("AABBCCDDEEFF"));
        assert_eq!(result.get(MacFormat::Lower), Some("aabbccddeeff"));
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_digits_only() {
        let result = formats("112233445566");
        assert_eq!(result.get(MacFormat::Colon), Some("11:22:33:44:55:66"));
        assert_eq!(result.get(MacFormat::Dot), Some("1122.3344.5566"));
        assert!(!result.has_plain_forms());
    }

    #[test]
    fn test_mixed_case_counts_as_lowercase() {
        assert!(formats("Aa:bB:cc:DD:ee:FF").has_plain_forms());
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), Normalization::Empty);
        assert_eq!(normalize("   "), Normalization::Empty);
        assert_eq!(normalize("\t\n"), Normalization::Empty);
    }

    #[test]
    fn test_too_few_digits() {
        assert_eq!(
            normalize("AA:BB:CC:DD:EE"),
            Normalization::Invalid { digits: 10 }
        );
        assert_eq!(
            normalize("AA:BB:CC:DD:EE:F"),
            Normalization::Invalid { digits: 11 }
        );
    }

    #[test]
    fn test_too_many_digits() {
        assert_eq!(
            normalize("AA:BB:CC:DD:EE:FF:00"),
            Normalization::Invalid { digits: 14 }
        );
    }

    #[test]
    fn test_no_mac_in_text() {
        assert_eq!(normalize("not a mac at all").state(), ValidationState::Invalid);
        assert_eq!(normalize("zzz").state(), ValidationState::Invalid);
    }

    #[test]
    fn test_noise_is_ignored() {
        let result = formats("  hw = 00:1b:44:11:3a:b7;  ");
        assert_eq!(result.get(MacFormat::Windows), Some("001B-4411-3AB7"));
        assert_eq!(result.get(MacFormat::Lower), Some("001b44113ab7"));
    }

    #[test]
    fn test_has_lowercase_digits() {
        assert!(has_lowercase_digits("aabbccddeeff"));
        assert!(!has_lowercase_digits("AABBCCDDEEFF"));
        assert!(!has_lowercase_digits("112233445566"));
    }
}
