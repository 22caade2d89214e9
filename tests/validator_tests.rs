//! Validator Tests
//!
//! Tests for record parsing and field-by-field validation.

use nimbus_ingest::record::{Record, Rejection, MAX_AGE, PHONE_DIGITS};

// =============================================================================
// Shape Tests
// =============================================================================

#[test]
fn test_parse_valid_record() {
    let record = Record::parse("João,joao@nimbus.com,01234567891,30").unwrap();

    assert_eq!(record.name, "João");
    assert_eq!(record.email, "joao@nimbus.com");
    assert_eq!(record.phone, "01234567891");
    assert_eq!(record.age, 30);
}

#[test]
fn test_parse_trims_fields() {
    let record = Record::parse("  Maria , maria@nimbus.com , 98765432100 , 25 ").unwrap();

    assert_eq!(record.name, "Maria");
    assert_eq!(record.email, "maria@nimbus.com");
    assert_eq!(record.phone, "98765432100");
    assert_eq!(record.age, 25);
}

#[test]
fn test_wrong_field_count_is_malformed() {
    // Fewer or more than four comma-separated fields, regardless of contents
    let inputs = [
        "João",
        "João,joao@nimbus.com",
        "João,joao@nimbus.com,01234567891",
        "João,joao@nimbus.com,01234567891,30,extra",
    ];

    for input in inputs {
        assert_eq!(Record::parse(input), Err(Rejection::MalformedInput), "{input:?}");
    }
}

#[test]
fn test_empty_input_is_malformed() {
    // A truly empty payload is a rejection, not a disconnect
    assert_eq!(Record::parse(""), Err(Rejection::MalformedInput));
}

// =============================================================================
// Field Check Tests
// =============================================================================

#[test]
fn test_empty_name_rejected() {
    assert_eq!(
        Record::parse(",joao@nimbus.com,01234567891,30"),
        Err(Rejection::InvalidName)
    );
    assert_eq!(
        Record::parse("   ,joao@nimbus.com,01234567891,30"),
        Err(Rejection::InvalidName)
    );
}

#[test]
fn test_email_checks() {
    let bad = [
        "not-an-email",
        "@nimbus.com",
        "joao@",
        "joao@@nimbus.com",
        "joao@nimbus.com@x.com",
        "joao@nimbuscom", // no dot in domain
    ];
    for email in bad {
        let input = format!("João,{},01234567891,30", email);
        assert_eq!(Record::parse(&input), Err(Rejection::InvalidEmail), "{email:?}");
    }

    assert!(Record::parse("João,joao@nimbus.com.br,01234567891,30").is_ok());
}

#[test]
fn test_phone_checks() {
    let bad = ["123", "0123456789", "012345678912", "0123456789a", "01234 67891"];
    for phone in bad {
        let input = format!("João,joao@nimbus.com,{},30", phone);
        assert_eq!(Record::parse(&input), Err(Rejection::InvalidPhone), "{phone:?}");
    }

    // Exactly 11 digits passes the phone check independent of other fields
    let record = Record::parse("João,joao@nimbus.com,00000000000,30").unwrap();
    assert_eq!(record.phone.len(), PHONE_DIGITS);
}

#[test]
fn test_age_checks() {
    let bad = ["-5", "151", "abc", "3.5", ""];
    for age in bad {
        let input = format!("João,joao@nimbus.com,01234567891,{}", age);
        assert_eq!(Record::parse(&input), Err(Rejection::InvalidAge), "{age:?}");
    }

    // Boundary values
    assert_eq!(Record::parse("João,joao@nimbus.com,01234567891,0").unwrap().age, 0);
    assert_eq!(
        Record::parse("João,joao@nimbus.com,01234567891,150").unwrap().age,
        MAX_AGE
    );
}

#[test]
fn test_first_failure_wins() {
    // Every field is bad; the name check fires first
    assert_eq!(Record::parse(",bad,12,999"), Err(Rejection::InvalidName));

    // Name passes, email check fires before phone and age
    assert_eq!(Record::parse("João,bad,12,999"), Err(Rejection::InvalidEmail));
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_to_line_matches_parse_order() {
    let input = "João,joao@nimbus.com,01234567891,30";
    let record = Record::parse(input).unwrap();

    assert_eq!(record.to_line(), input);
    assert_eq!(Record::parse(&record.to_line()).unwrap(), record);
}
