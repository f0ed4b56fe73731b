use pdf_booklet::*;

#[test]
fn test_missing_parameter_is_zero() {
    assert_eq!(parse_units(None).unwrap(), 0);
}

#[test]
fn test_metric_units() {
    // 10mm = 28.378pt
    assert_eq!(parse_units(Some("10mm")).unwrap(), 28);
    assert_eq!(parse_units(Some("1cm")).unwrap(), 28);
    assert_eq!(parse_units(Some("148mm")).unwrap(), 420);
    assert_eq!(parse_units(Some("-5mm")).unwrap(), -14);
}

#[test]
fn test_inch_units() {
    assert_eq!(parse_units(Some("1in")).unwrap(), 72);
    assert_eq!(parse_units(Some("8.5in")).unwrap(), 612);
    assert_eq!(parse_units(Some("-0.1in")).unwrap(), -7);
    assert_eq!(parse_units(Some(".25in")).unwrap(), 18);
}

#[test]
fn test_half_rounds_to_even() {
    // 4.5pt and 13.5pt
    assert_eq!(parse_units(Some("0.0625in")).unwrap(), 4);
    assert_eq!(parse_units(Some("0.1875in")).unwrap(), 14);
}

#[test]
fn test_metric_halves_round_to_even() {
    // 3.7mm is 10.5pt, 11.1mm is 31.5pt
    assert_eq!(parse_units(Some("3.7mm")).unwrap(), 10);
    assert_eq!(parse_units(Some("11.1mm")).unwrap(), 31);
    assert_eq!(parse_units(Some("-3.7mm")).unwrap(), -10);
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert_eq!(parse_units(Some(" 5mm ")).unwrap(), 14);
    assert_eq!(parse_units(Some("\t1in\n")).unwrap(), 72);
}

#[test]
fn test_invalid_parameters() {
    for bad in ["abc", "5", "5pt", "mm", "5 mm", "5.in", "1e3in", "in5", "--1in"] {
        match parse_units(Some(bad)) {
            Err(BookletError::Format(param)) => assert_eq!(param, bad),
            other => panic!("Expected Format error for {:?}, got {:?}", bad, other),
        }
    }
}
