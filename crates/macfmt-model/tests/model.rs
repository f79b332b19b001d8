//! Tests for macfmt-model types.

use macfmt_model::{FormattedMac, MacAddress, MacFormat, Normalization, ValidationState};

fn address() -> MacAddress {
    "aa:bb:cc:dd:ee:ff".parse().expect("valid address")
}

#[test]
fn formatted_mac_serializes_in_display_order() {
    let formatted = FormattedMac::new(address(), true);
    let json = serde_json::to_string(&formatted).expect("serialize formats");
    assert_eq!(
        json,
        r#"{"colon":"AA:BB:CC:DD:EE:FF","hyphen":"AA-BB-CC-DD-EE-FF","windows":"AABB-CCDD-EEFF","dot":"AABB.CCDD.EEFF","upper":"AABBCCDDEEFF","lower":"aabbccddeeff"}"#
    );
}

#[test]
fn normalization_serializes_with_state_tag() {
    let invalid = serde_json::to_value(Normalization::Invalid { digits: 11 }).expect("serialize");
    assert_eq!(invalid["state"], "invalid");
    assert_eq!(invalid["digits"], 11);

    let empty = serde_json::to_value(Normalization::Empty).expect("serialize");
    assert_eq!(empty["state"], "empty");

    let valid = serde_json::to_value(Normalization::Valid {
        formats: FormattedMac::new(address(), false),
    })
    .expect("serialize");
    assert_eq!(valid["state"], "valid");
    assert_eq!(valid["formats"]["dot"], "AABB.CCDD.EEFF");
    assert!(valid["formats"].get("upper").is_none());
}

#[test]
fn validation_state_uses_lowercase_names() {
    let json = serde_json::to_string(&ValidationState::Invalid).expect("serialize");
    assert_eq!(json, "\"invalid\"");
    assert_eq!(ValidationState::default(), ValidationState::Empty);
}

#[test]
fn format_names_deserialize() {
    let format: MacFormat = serde_json::from_str("\"windows\"").expect("deserialize");
    assert_eq!(format, MacFormat::Windows);
}

#[test]
fn separated_values_have_expected_shape() {
    let formatted = FormattedMac::new(address(), false);
    for (format, value) in formatted.iter() {
        let separator = format.separator().expect("separated format");
        let groups: Vec<&str> = value.split(separator).collect();
        assert_eq!(groups.len(), 12 / format.group_width(), "{format}");
        assert!(groups.iter().all(|g| g.len() == format.group_width()));
    }
}
