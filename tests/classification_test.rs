use package_sorter::{classify, parse, Category, ErrorKind, Field, ParseError, Sorter, MassUnit};

#[test]
fn test_dimension_equal_to_threshold_is_special() {
    let spec = parse("150,1,1,0").unwrap();
    assert_eq!(spec.volume(), 150.0);
    assert_eq!(classify(&spec), Category::Special);
}

#[test]
fn test_volume_equal_to_threshold_is_special() {
    let spec = parse("100,100,100,0").unwrap();
    assert_eq!(spec.volume(), 1_000_000.0);
    assert_eq!(classify(&spec), Category::Special);
}

#[test]
fn test_both_thresholds_met_is_rejected() {
    assert_eq!(classify(&parse("200,10,10,25").unwrap()), Category::Rejected);
}

#[test]
fn test_neither_threshold_met_is_standard() {
    assert_eq!(classify(&parse("10,10,10,1").unwrap()), Category::Standard);
}

#[test]
fn test_heavy_only_is_special() {
    assert_eq!(classify(&parse("10,10,10,25").unwrap()), Category::Special);
}

#[test]
fn test_malformed_count() {
    let err = parse("10,10,10").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert_eq!(
        err,
        ParseError::FieldCount {
            expected: 4,
            found: 3
        }
    );
}

#[test]
fn test_non_numeric_field() {
    let err = parse("10,abc,10,1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert!(err.to_string().contains("field 2"));
    assert!(err.to_string().contains("abc"));
}

#[test]
fn test_negative_value_is_not_clamped() {
    let err = parse("10,10,-5,1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidMeasurement);
    assert_eq!(
        err,
        ParseError::Negative {
            field: Field::Length,
            value: -5.0
        }
    );
}

#[test]
fn test_canonical_form_round_trips() {
    let spec = parse(" 12.5, 3e1 ,0.125, 7 ").unwrap();
    let canonical = spec.to_string();
    assert_eq!(canonical, "12.5,30,0.125,7");
    assert_eq!(parse(&canonical).unwrap(), spec);
}

#[test]
fn test_sorter_grams_threshold() {
    let sorter = Sorter::new(MassUnit::Grams);
    assert_eq!(sorter.sort("10,10,10,19999").unwrap().category, Category::Standard);
    assert_eq!(sorter.sort("10,10,10,20000").unwrap().category, Category::Special);
}
