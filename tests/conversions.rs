use romana::{MAX_VALUE, MIN_VALUE, convert, error::ConvertError, numeral::value::Value,
             to_arabic, to_roman};

/// Known value/numeral pairs, the 13 glyphs plus a few composites.
const PREDEFINED: [(i64, &str); 16] = [(1, "I"),
                                       (4, "IV"),
                                       (5, "V"),
                                       (9, "IX"),
                                       (10, "X"),
                                       (40, "XL"),
                                       (50, "L"),
                                       (90, "XC"),
                                       (100, "C"),
                                       (400, "CD"),
                                       (500, "D"),
                                       (900, "CM"),
                                       (1000, "M"),
                                       (42, "XLII"),
                                       (787, "DCCLXXXVII"),
                                       (2019, "MMXIX")];

fn assert_invalid(text: &str) {
    match to_arabic(text) {
        Err(ConvertError::InvalidNumeral { .. }) => {},
        other => panic!("{text:?} should fail grammar validation, got {other:?}"),
    }
}

fn assert_out_of_range(value: i64) {
    match to_roman(value) {
        Err(ConvertError::OutOfRange { value: found }) => assert_eq!(found, value),
        other => panic!("{value} should be out of range, got {other:?}"),
    }
}

#[test]
fn predefined_pairs_encode() {
    for (arabic, roman) in PREDEFINED {
        assert_eq!(to_roman(arabic).unwrap(), roman);
    }
}

#[test]
fn predefined_pairs_decode() {
    for (arabic, roman) in PREDEFINED {
        assert_eq!(to_arabic(roman).unwrap(), arabic);
    }
}

#[test]
fn whole_range_round_trips() {
    for value in MIN_VALUE..=MAX_VALUE {
        let roman = to_roman(value).unwrap();
        assert_eq!(to_arabic(&roman).unwrap(), value, "round trip broke at {value} ({roman})");
    }
}

#[test]
fn decoding_then_encoding_restores_canonical_form() {
    for (_, roman) in PREDEFINED {
        assert_eq!(to_roman(to_arabic(roman).unwrap()).unwrap(), roman);
    }
}

#[test]
fn boundary_values() {
    assert_eq!(to_roman(MIN_VALUE).unwrap(), "I");
    assert_eq!(to_roman(MAX_VALUE).unwrap(), "MMMCMXCIX");

    assert_out_of_range(0);
    assert_out_of_range(4000);
    assert_out_of_range(-2019);
    assert_out_of_range(i64::MIN);
    assert_out_of_range(i64::MAX);
}

#[test]
fn out_of_range_message_names_the_bounds() {
    let message = to_roman(0).unwrap_err().to_string();
    assert_eq!(message, "value shall be between 1 and 3999");
}

#[test]
fn lowercase_and_mixed_case_are_accepted() {
    assert_eq!(to_arabic("mmxix").unwrap(), 2019);
    assert_eq!(to_arabic("McmXc").unwrap(), 1990);
    assert_eq!(to_arabic("dcclxxxvii").unwrap(), 787);
}

#[test]
fn invalid_subtractive_pairs_are_rejected() {
    for text in ["IL", "IC", "ID", "IM", "VX", "VL", "VC", "VD", "VM", "XD", "XM", "LC", "LD",
                 "LM", "DM"]
    {
        assert_invalid(text);
    }
}

#[test]
fn overlong_additive_runs_are_rejected() {
    assert_invalid("IIII");
    assert_invalid("VV");
    assert_invalid("XXXX");
    assert_invalid("CCCC");
    assert_invalid("MMMM");
}

#[test]
fn stray_characters_are_rejected() {
    assert_invalid("MCXJOAO0123");
    assert_invalid("MMXIX ");
    assert_invalid(" MMXIX");
    assert_invalid("MM XIX");
    assert_invalid("XVIIII?");
}

#[test]
fn empty_string_is_rejected() {
    assert_invalid("");
}

#[test]
fn invalid_numeral_message_names_the_alphabet() {
    let message = to_arabic("IL").unwrap_err().to_string();
    assert!(message.contains("I,V,X,L,C,D,M"), "unexpected message: {message}");
}

#[test]
fn wrongly_typed_arguments_fail_before_validation() {
    // Text where an integer is required, even when it would parse in range.
    match Value::from("89").to_roman() {
        Err(ConvertError::TypeMismatch { expected, found }) => {
            assert_eq!(expected, "integer");
            assert_eq!(found, "text");
        },
        other => panic!("expected a type mismatch, got {other:?}"),
    }

    // An integer where numeral text is required.
    match Value::from(89).to_arabic() {
        Err(ConvertError::TypeMismatch { expected, found }) => {
            assert_eq!(expected, "text");
            assert_eq!(found, "integer");
        },
        other => panic!("expected a type mismatch, got {other:?}"),
    }

    // A fractional argument is never truncated into range.
    assert!(matches!(Value::classify("3.5").to_roman(),
                     Err(ConvertError::TypeMismatch { .. })));
}

#[test]
fn convert_dispatches_on_the_dynamic_type() {
    assert_eq!(convert(&Value::classify("2019")).unwrap(), Value::from("MMXIX"));
    assert_eq!(convert(&Value::classify("MMXIX")).unwrap(), Value::Integer(2019));
    assert_eq!(convert(&Value::classify("xlii")).unwrap(), Value::Integer(42));

    assert!(matches!(convert(&Value::classify("3.5")),
                     Err(ConvertError::TypeMismatch { .. })));
}

#[test]
fn subtractive_forms_per_place() {
    assert_eq!(to_roman(4).unwrap(), "IV");
    assert_eq!(to_roman(9).unwrap(), "IX");
    assert_eq!(to_roman(40).unwrap(), "XL");
    assert_eq!(to_roman(90).unwrap(), "XC");
    assert_eq!(to_roman(400).unwrap(), "CD");
    assert_eq!(to_roman(900).unwrap(), "CM");
    assert_eq!(to_roman(444).unwrap(), "CDXLIV");
    assert_eq!(to_roman(999).unwrap(), "CMXCIX");
}
