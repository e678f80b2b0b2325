//! Replicate measurements of the reference treatment trial.
//!
//! Two samplings (January and April), four treatments, five replicates per series.

use super::{DatasetEntry, SamplingTime};

pub(crate) fn entries() -> Vec<DatasetEntry> {
    use SamplingTime::{Early, Late};

    vec![
        DatasetEntry::new(
            Early,
            "CK1",
            vec![14.23, 14.42, 13.46, 14.23, 13.85],
            vec![1.9829, 2.0698, 2.0935, 2.02635, 2.0461],
            vec![0.9112, 0.938, 0.8844, 0.9112, 0.8844],
        ),
        DatasetEntry::new(
            Early,
            "CK2",
            vec![5.38, 5.58, 5.58, 5.77, 5.77],
            vec![1.9355, 1.9592, 1.9829, 1.97105, 1.9987],
            vec![0.8576, 0.938, 0.9112, 0.8576, 0.938],
        ),
        DatasetEntry::new(
            Early,
            "TK",
            vec![14.04, 12.69, 13.27, 12.88, 13.85],
            vec![1.99475, 2.08955, 2.1251, 2.0461, 2.02635],
            vec![0.9112, 0.8844, 0.9112, 0.938, 0.8576],
        ),
        DatasetEntry::new(
            Early,
            "TC",
            vec![3.27, 3.46, 3.27, 3.27, 3.08],
            vec![1.4141, 1.48125, 1.5089, 1.4378, 1.58395],
            vec![0.7772, 0.7772, 0.8308, 0.8576, 0.804],
        ),
        DatasetEntry::new(
            Late,
            "CK1",
            vec![11.35, 12.88, 12.12, 12.88, 12.50],
            vec![2.82425, 2.83215, 2.8914, 2.84795, 2.8835],
            vec![0.938, 0.9112, 0.938, 0.9648, 0.938],
        ),
        DatasetEntry::new(
            Late,
            "CK2",
            vec![7.12, 7.88, 8.08, 7.50, 7.31],
            vec![2.9783, 2.9546, 2.98225, 2.99015, 2.91905],
            vec![0.9648, 0.938, 0.9648, 0.938, 0.9112],
        ),
        DatasetEntry::new(
            Late,
            "TK",
            vec![14.23, 13.85, 14.04, 14.04, 13.85],
            vec![2.7966, 2.85585, 2.8282, 2.77685, 2.86375],
            vec![0.9916, 0.9648, 0.9916, 1.0184, 0.9916],
        ),
        DatasetEntry::new(
            Late,
            "TC",
            vec![5.19, 6.15, 5.77, 5.58, 5.96],
            vec![2.85585, 2.86375, 2.7887, 2.89535, 2.84005],
            vec![1.0184, 1.0184, 0.9916, 0.9916, 0.9916],
        ),
    ]
}
