use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use super::dataset_split::DatasetSplit;
use super::error::SplitError;

/// Files copied into each split for one class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSummary {
    pub train: usize,
    pub valid: usize,
    pub test: usize,
}

impl ClassSummary {
    pub fn get(&self, split: DatasetSplit) -> usize {
        match split {
            DatasetSplit::Train => self.train,
            DatasetSplit::Valid => self.valid,
            DatasetSplit::Test => self.test,
        }
    }

    pub fn total(&self) -> usize {
        self.train + self.valid + self.test
    }
}

#[derive(Debug)]
pub struct ClassOutcome {
    pub class: OsString,
    pub result: Result<ClassSummary, SplitError>,
}

#[derive(Debug)]
pub struct SplitReport {
    pub output_root: PathBuf,
    /// Seed the shuffles were drawn from, `None` when shuffling was off.
    pub seed: Option<u64>,
    pub outcomes: Vec<ClassOutcome>,
}

impl SplitReport {
    pub fn failures(&self) -> impl Iterator<Item = (&OsStr, &SplitError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.class.as_os_str(), e)))
    }

    /// True when every class was split without error.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn summary(&self, class: impl AsRef<OsStr>) -> Option<&ClassSummary> {
        let class = class.as_ref();
        self.outcomes
            .iter()
            .find(|o| o.class == class)
            .and_then(|o| o.result.as_ref().ok())
    }

    pub fn split_total(&self, split: DatasetSplit) -> usize {
        self.successes().map(|s| s.get(split)).sum()
    }

    pub fn total_copied(&self) -> usize {
        self.successes().map(ClassSummary::total).sum()
    }

    fn successes(&self) -> impl Iterator<Item = &ClassSummary> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }
}

pub fn print_split_report(report: &SplitReport) {
    let total = report.total_copied();
    let failed = report.failures().count();

    println!("Split Information:");
    println!("-------------------");
    println!("Output: {}", report.output_root.display());
    println!("Classes: {} ({} failed)", report.outcomes.len(), failed);
    println!("Files copied: {}", total);
    println!();
    println!("{:<24} {:>8} {:>8} {:>8}", "Class", "train", "valid", "test");
    println!("{:-<51}", "");
    for outcome in &report.outcomes {
        let class = outcome.class.to_string_lossy();
        match &outcome.result {
            Ok(s) => println!(
                "{:<24} {:>8} {:>8} {:>8}",
                class, s.train, s.valid, s.test
            ),
            Err(e) => println!("{:<24} FAILED: {}", class, e),
        }
    }
    println!("{:-<51}", "");
    for split in DatasetSplit::ALL {
        let size = report.split_total(split);
        let pct = if total > 0 {
            size as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        println!("{:<6} {:>8} ({:.2}%)", split, size, pct);
    }
    println!();
    println!("Seed: {:?}", report.seed);
}
