use super::*;

#[test]
fn test_reference_dataset_shape() {
    let dataset = Dataset::reference();

    assert_eq!(dataset.entries().len(), 8);
    assert_eq!(dataset.value_count(), 120);

    let groups: Vec<String> = dataset.groups().iter().map(|g| g.to_string()).collect();
    assert_eq!(groups, vec!["CK1", "CK2", "TK", "TC"]);

    // The reference constants must satisfy the same rules as loaded datasets
    let revalidated = Dataset::new(dataset.entries().to_vec()).unwrap();
    assert_eq!(revalidated, dataset);
}

#[test]
fn test_entry_lookup() {
    let dataset = Dataset::reference();
    let entry = dataset
        .entry(SamplingTime::Early, &Group::new("CK1"))
        .unwrap();

    assert_eq!(entry.series(Metric::AscorbicAcid), &[14.23, 14.42, 13.46, 14.23, 13.85]);
    assert_eq!(entry.series(Metric::Acid).len(), 5);
    assert!(dataset.entry(SamplingTime::Late, &Group::new("XX")).is_none());
}

#[test]
fn test_duplicate_entry_rejected() {
    let entry = DatasetEntry::new(SamplingTime::Early, "A", vec![1.0], vec![1.0], vec![1.0]);
    let err = Dataset::new(vec![entry.clone(), entry]).unwrap_err();

    match err {
        DatasetError::DuplicateEntry { group, time } => {
            assert_eq!(group.as_str(), "A");
            assert_eq!(time, SamplingTime::Early);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_incomplete_group_rejected() {
    let entry = DatasetEntry::new(SamplingTime::Early, "A", vec![1.0], vec![1.0], vec![1.0]);
    let err = Dataset::new(vec![entry]).unwrap_err();

    assert!(matches!(
        err,
        DatasetError::IncompleteGroup { missing: SamplingTime::Late, .. }
    ));
    assert!(err.to_string().contains("'A'"));
}

#[test]
fn test_empty_dataset_rejected() {
    assert!(matches!(Dataset::new(Vec::new()), Err(DatasetError::Empty)));
    assert!(matches!(Dataset::from_toml_str(""), Err(DatasetError::Empty)));
}

#[test]
fn test_parse_toml_dataset() {
    let toml = r#"
        [[entries]]
        time = "early"
        group = "G1"
        vc = [10.0, 11.0]
        sugar = [2.0, 2.2]
        acid = [1.0, 1.1]

        [[entries]]
        time = "late"
        group = "G1"
        vc = [12.0]
        sugar = [3.0]
        acid = [1.5]
    "#;

    let dataset = Dataset::from_toml_str(toml).unwrap();
    assert_eq!(dataset.entries().len(), 2);
    assert_eq!(dataset.groups(), vec![Group::new("G1")]);

    let late = dataset.entry(SamplingTime::Late, &Group::new("G1")).unwrap();
    assert_eq!(late.sugar, vec![3.0]);
}

#[test]
fn test_parse_toml_rejects_unknown_time() {
    let toml = r#"
        [[entries]]
        time = "midsummer"
        group = "G1"
        vc = [1.0]
        sugar = [1.0]
        acid = [1.0]
    "#;

    assert!(matches!(
        Dataset::from_toml_str(toml),
        Err(DatasetError::TomlError(_))
    ));
}
