use pdf_booklet::*;

#[test]
fn test_default_options() {
    let options = BookletOptions::default();
    assert_eq!(options.paper, PaperSize::Letter);
    assert_eq!(options.layout, LayoutMode::Large);
    assert_eq!(options.blank_pages, 0);
    assert_eq!(options.signature_size, 0);
    assert_eq!(options.hoffset, None);
    assert_eq!(options.width_adjust, None);
    assert_eq!(options.height_adjust, None);
    assert_eq!(options.alignment, Alignment::Center);
    assert!(options.validate().is_ok());
}

#[test]
fn test_signature_size_must_fold() {
    let mut options = BookletOptions::default();
    for size in [0, 4, 8, 16, 32] {
        options.signature_size = size;
        assert!(options.validate().is_ok(), "size {}", size);
    }
    for size in [1, 2, 6, 10] {
        options.signature_size = size;
        assert!(matches!(options.validate(), Err(BookletError::Config(_))));
    }
}

#[test]
fn test_resolve_parses_adjustments() {
    let options = BookletOptions {
        paper: PaperSize::Tabloid,
        layout: LayoutMode::Small,
        blank_pages: 2,
        width_adjust: Some("10mm".into()),
        height_adjust: Some("-1in".into()),
        hoffset: Some("0.5in".into()),
        alignment: Alignment::Top,
        ..Default::default()
    };

    let settings = options.resolve().unwrap();
    assert_eq!(settings.paper, PaperSize::Tabloid);
    assert_eq!(settings.mode, LayoutMode::Small);
    assert_eq!(settings.blank_pages, 2);
    assert_eq!(settings.alignment, Alignment::Top);
    assert_eq!(
        settings.adjustments,
        Adjustments {
            width: 28,
            height: -72,
            hoffset: Some(36),
        }
    );
}

#[test]
fn test_resolve_without_hoffset() {
    let settings = BookletOptions::default().resolve().unwrap();
    assert_eq!(settings.adjustments, Adjustments::default());
    assert_eq!(settings.adjustments.hoffset, None);
}

#[test]
fn test_resolve_zero_hoffset_is_still_set() {
    let options = BookletOptions {
        hoffset: Some("0mm".into()),
        ..Default::default()
    };
    assert_eq!(options.resolve().unwrap().adjustments.hoffset, Some(0));
}

#[test]
fn test_resolve_rejects_bad_units() {
    let options = BookletOptions {
        width_adjust: Some("5pt".into()),
        ..Default::default()
    };
    match options.resolve() {
        Err(BookletError::Format(param)) => assert_eq!(param, "5pt"),
        other => panic!("Expected Format error, got {:?}", other),
    }
}

#[cfg(feature = "serde")]
mod json {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let options = BookletOptions {
            paper: PaperSize::A5,
            layout: LayoutMode::Small,
            signature_size: 16,
            hoffset: Some("3mm".into()),
            alignment: Alignment::Bottom,
            ..Default::default()
        };
        let json = options.to_json().unwrap();
        assert!(json.contains("\"a5\""));
        assert!(json.contains("\"small\""));
        assert_eq!(BookletOptions::from_json(&json).unwrap(), options);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options = BookletOptions::from_json(r#"{"paper": "a4", "blank_pages": 3}"#).unwrap();
        assert_eq!(options.paper, PaperSize::A4);
        assert_eq!(options.blank_pages, 3);
        assert_eq!(options.layout, LayoutMode::Large);
        assert_eq!(options.alignment, Alignment::Center);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            BookletOptions::from_json(r#"{"paper": "b5"}"#),
            Err(BookletError::Config(_))
        ));
        assert!(matches!(
            BookletOptions::from_json("not json"),
            Err(BookletError::Config(_))
        ));
    }
}
