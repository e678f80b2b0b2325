use super::*;
use crate::dataset::{Dataset, DatasetEntry};

#[test]
fn test_parse_hex_color() {
    let color: HexColor = "#1f77b4".parse().unwrap();
    assert_eq!(color, HexColor::new(0x1f, 0x77, 0xb4));
    assert_eq!(color.to_string(), "#1f77b4");

    let upper: HexColor = "#D62728".parse().unwrap();
    assert_eq!(upper, HexColor::new(0xd6, 0x27, 0x28));
}

#[test]
fn test_reject_malformed_colors() {
    for bad in ["1f77b4", "#1f77b", "#1f77b4ff", "#gg0000", "", "#"] {
        let err = bad.parse::<HexColor>().unwrap_err();
        assert_eq!(err, EncodingError::InvalidColor(bad.to_string()));
    }
}

#[test]
fn test_reference_encoding_lookup() {
    let encoding = VisualEncoding::reference();
    encoding.validate().unwrap();

    assert_eq!(
        encoding.color_of(&Group::new("TK")).unwrap(),
        HexColor::new(0x2c, 0xa0, 0x2c)
    );

    let early = encoding.time_style(SamplingTime::Early).unwrap();
    assert_eq!(early.label, "Jan");
    assert_eq!(early.marker, MarkerShape::Circle);
    let late = encoding.time_style(SamplingTime::Late).unwrap();
    assert_eq!(late.marker, MarkerShape::Square);
    assert!(early.area > late.area);
}

#[test]
fn test_missing_group_is_configuration_mismatch() {
    let encoding = VisualEncoding::reference();
    let err = encoding.color_of(&Group::new("XX")).unwrap_err();

    assert!(err.is_configuration_mismatch());
    assert!(err.to_string().contains("'XX'"));
}

#[test]
fn test_missing_time_is_configuration_mismatch() {
    let mut encoding = VisualEncoding::reference();
    encoding.times.retain(|t| t.time == SamplingTime::Early);

    let err = encoding.time_style(SamplingTime::Late).unwrap_err();
    assert_eq!(
        err,
        EncodingError::MissingSamplingTime {
            time: SamplingTime::Late
        }
    );
    assert!(err.is_configuration_mismatch());
}

#[test]
fn test_check_table_names_unknown_group() {
    let dataset = Dataset::new(vec![
        DatasetEntry::new(SamplingTime::Early, "CK1", vec![1.0], vec![1.0], vec![1.0]),
        DatasetEntry::new(SamplingTime::Late, "CK1", vec![1.0], vec![1.0], vec![1.0]),
        DatasetEntry::new(SamplingTime::Early, "NEW", vec![1.0], vec![1.0], vec![1.0]),
        DatasetEntry::new(SamplingTime::Late, "NEW", vec![1.0], vec![1.0], vec![1.0]),
    ])
    .unwrap();
    let table = SummaryTable::from_dataset(&dataset).unwrap();

    let err = VisualEncoding::reference().check_table(&table).unwrap_err();
    assert_eq!(
        err,
        EncodingError::MissingGroup {
            group: Group::new("NEW")
        }
    );
}

#[test]
fn test_validate_rejects_duplicates_and_bad_areas() {
    let mut encoding = VisualEncoding::reference();
    encoding
        .groups
        .push(GroupStyle::new("CK1", HexColor::new(0, 0, 0)));
    assert!(matches!(
        encoding.validate(),
        Err(EncodingError::DuplicateGroup { .. })
    ));

    let mut encoding = VisualEncoding::reference();
    encoding.times[1].area = 0.0;
    assert!(matches!(
        encoding.validate(),
        Err(EncodingError::InvalidMarkerArea { .. })
    ));
}

#[test]
fn test_encoding_from_toml() {
    let toml = r##"
        [[groups]]
        group = "A"
        color = "#000000"

        [[times]]
        time = "early"
        label = "Spring"
        marker = "diamond"
        area = 64.0
    "##;

    let encoding: VisualEncoding = toml::from_str(toml).unwrap();
    assert_eq!(encoding.groups.len(), 1);
    assert_eq!(encoding.times[0].marker, MarkerShape::Diamond);
    assert_eq!(encoding.times[0].half_size_pt(), 4.0);

    let bad = r##"
        [[groups]]
        group = "A"
        color = "black"
    "##;
    assert!(toml::from_str::<VisualEncoding>(bad).is_err());
}
