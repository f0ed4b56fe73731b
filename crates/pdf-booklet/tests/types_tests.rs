use pdf_booklet::*;

#[test]
fn test_paper_dimensions() {
    assert_eq!(PaperSize::Letter.dimensions(), (612.0, 792.0));
    assert_eq!(PaperSize::Legal.dimensions(), (612.0, 1008.0));
    assert_eq!(PaperSize::Tabloid.dimensions(), (792.0, 1224.0));
    assert_eq!(PaperSize::A5.dimensions(), (420.0, 595.0));
    assert_eq!(PaperSize::A4.dimensions(), (595.0, 842.0));
}

#[test]
fn test_paper_rotated_dimensions() {
    for paper in PaperSize::ALL {
        let (width, height) = paper.dimensions();
        assert_eq!(paper.rotated_dimensions(), (height, width));
    }
    assert_eq!(PaperSize::Letter.rotated_dimensions(), (792.0, 612.0));
}

#[test]
fn test_paper_from_str() {
    assert_eq!("letter".parse::<PaperSize>().unwrap(), PaperSize::Letter);
    assert_eq!("A4".parse::<PaperSize>().unwrap(), PaperSize::A4);
    assert_eq!(" Tabloid ".parse::<PaperSize>().unwrap(), PaperSize::Tabloid);

    for paper in PaperSize::ALL {
        assert_eq!(paper.to_string().parse::<PaperSize>().unwrap(), paper);
    }
}

#[test]
fn test_paper_from_str_lists_valid_names() {
    match "b5".parse::<PaperSize>() {
        Err(BookletError::Config(msg)) => {
            assert!(msg.contains("b5"));
            assert!(msg.contains("letter, legal, tabloid, a5, a4"));
        }
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_alignment_from_str() {
    assert_eq!("top".parse::<Alignment>().unwrap(), Alignment::Top);
    assert_eq!("Center".parse::<Alignment>().unwrap(), Alignment::Center);
    assert_eq!("BOTTOM".parse::<Alignment>().unwrap(), Alignment::Bottom);
    assert!(matches!(
        "middle".parse::<Alignment>(),
        Err(BookletError::Config(_))
    ));
    assert_eq!(Alignment::default(), Alignment::Center);
}

#[test]
fn test_layout_mode() {
    assert_eq!("large".parse::<LayoutMode>().unwrap(), LayoutMode::Large);
    assert_eq!("small".parse::<LayoutMode>().unwrap(), LayoutMode::Small);
    assert!("medium".parse::<LayoutMode>().is_err());

    assert_eq!(LayoutMode::default(), LayoutMode::Large);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        BookletError::Format("5pt".into()).to_string(),
        "Unable to parse parameter '5pt'"
    );
    assert_eq!(
        BookletError::Range {
            page: 9,
            start: 0,
            end: 7
        }
        .to_string(),
        "Page 9 out of range (0 to 7)"
    );
    assert_eq!(BookletError::NoPages.to_string(), "No pages to impose");
}
