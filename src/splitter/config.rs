use super::error::SplitError;

// TODO: Extension filter could take a user supplied list instead of only image formats
#[derive(Clone, Debug)]
pub struct SplitConfig {
    /// Fraction of each class sent to `test`.
    pub test_ratio: f64,
    /// Fraction of the post-test remainder sent to `valid`.
    pub valid_ratio: f64,
    pub shuffle: bool,
    pub shuffle_seed: Option<u64>,
    /// Sort file names before partitioning.
    pub sort_dataset: bool,
    /// Replace files already present at the destination.
    pub overwrite: bool,
    /// Only consider files with a known image extension.
    pub images_only: bool,
}

impl SplitConfig {
    pub fn build(self) -> Result<Self, SplitError> {
        check_split_ratios(self.test_ratio, self.valid_ratio)?;

        Ok(self)
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_ratio: 0.2,
            valid_ratio: 0.2,
            shuffle: true,
            shuffle_seed: None,
            sort_dataset: false,
            overwrite: true,
            images_only: false,
        }
    }
}

fn check_split_ratios(test_ratio: f64, valid_ratio: f64) -> Result<(), SplitError> {
    let in_range = |r: f64| r.is_finite() && (0.0..1.0).contains(&r);
    if !in_range(test_ratio) || !in_range(valid_ratio) {
        return Err(SplitError::InvalidSplitRatios {
            test: test_ratio,
            valid: valid_ratio,
        });
    }
    Ok(())
}
