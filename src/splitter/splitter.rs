use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::config::SplitConfig;
use super::discovery::{discover_classes, list_class_files, ExtensionFilter};
use super::error::SplitError;
use super::layout::OutputLayout;
use super::partition::partition;
use super::report::{ClassOutcome, ClassSummary, SplitReport};

pub struct DatasetSplitter {
    input_root: PathBuf,
    output_root: PathBuf,
    extension_filter: Option<ExtensionFilter>,
    config: SplitConfig,
}

impl DatasetSplitter {
    pub fn new(
        input_root: impl AsRef<Path>,
        output_root: impl AsRef<Path>,
        config: SplitConfig,
    ) -> Result<Self, SplitError> {
        let path = input_root.as_ref();
        if !path.exists() {
            return Err(SplitError::InputNotFound(path.to_owned()));
        }
        if !path.is_dir() {
            return Err(SplitError::NotADirectory(path.to_owned()));
        }

        let config = config.build()?;
        let extension_filter = config.images_only.then(ExtensionFilter::images);

        Ok(DatasetSplitter {
            input_root: path.to_owned(),
            output_root: output_root.as_ref().to_owned(),
            extension_filter,
            config,
        })
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn discover(&self) -> Result<Vec<OsString>, SplitError> {
        discover_classes(&self.input_root)
    }

    /// Discovers classes and splits them with a `StdRng` seeded from
    /// `shuffle_seed`. A random seed is drawn when none is configured and
    /// recorded in the report.
    pub fn run(&self) -> Result<SplitReport, SplitError> {
        let classes = self.discover()?;

        let seed = self
            .config
            .shuffle_seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);

        let mut report = self.execute(&classes, &mut rng)?;
        report.seed = self.config.shuffle.then_some(seed);
        Ok(report)
    }

    /// Creates the output tree for `classes` and splits each one in turn.
    /// Only failing to create the tree is fatal; a class that fails is
    /// recorded in the report and the next class is processed.
    pub fn execute<R>(&self, classes: &[OsString], rng: &mut R) -> Result<SplitReport, SplitError>
    where
        R: Rng + ?Sized,
    {
        let layout = OutputLayout::create(&self.output_root, classes)?;
        info!(
            "Splitting {} classes from {} into {}",
            classes.len(),
            self.input_root.display(),
            layout.root().display()
        );

        let mut outcomes = Vec::with_capacity(classes.len());
        for class in classes {
            info!("{}", self.input_root.join(class).display());

            let result = self.split_class(&layout, class, rng);
            match &result {
                Ok(summary) => info!(
                    "{}: copied {} files (train {}, valid {}, test {})",
                    class.to_string_lossy(),
                    summary.total(),
                    summary.train,
                    summary.valid,
                    summary.test
                ),
                Err(e) => warn!(
                    "Failed to split class directory {}: {}",
                    class.to_string_lossy(),
                    e
                ),
            }

            outcomes.push(ClassOutcome {
                class: class.clone(),
                result,
            });
        }

        info!("complete");

        Ok(SplitReport {
            output_root: layout.root().to_owned(),
            seed: None,
            outcomes,
        })
    }

    fn split_class<R>(
        &self,
        layout: &OutputLayout,
        class: &OsStr,
        rng: &mut R,
    ) -> Result<ClassSummary, SplitError>
    where
        R: Rng + ?Sized,
    {
        let class_dir = self.input_root.join(class);
        let files = list_class_files(
            &class_dir,
            self.extension_filter.as_ref(),
            self.config.sort_dataset,
        )?;

        let shuffle_rng = if self.config.shuffle { Some(rng) } else { None };
        let split = partition(
            files,
            self.config.test_ratio,
            self.config.valid_ratio,
            shuffle_rng,
        );
        debug!(
            "{}: {} train, {} valid, {} test",
            class.to_string_lossy(),
            split.train.len(),
            split.valid.len(),
            split.test.len()
        );

        // Checked before copying so a refused class leaves nothing behind
        if !self.config.overwrite {
            for (dataset_split, filename) in split.iter() {
                let dst = layout.destination(dataset_split, class, filename);
                if dst.exists() {
                    return Err(SplitError::DestinationExists(dst));
                }
            }
        }

        for (dataset_split, filename) in split.iter() {
            let src = class_dir.join(filename);
            let dst = layout.destination(dataset_split, class, filename);
            fs::copy(&src, &dst).map_err(|e| SplitError::io(&src, e))?;
        }

        Ok(ClassSummary {
            train: split.train.len(),
            valid: split.valid.len(),
            test: split.test.len(),
        })
    }
}
