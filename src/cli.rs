use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use crate::splitter::config::SplitConfig;
use crate::splitter::layout::resolve_output_root;

/// Copy a dataset of class directories into train/valid/test splits.
#[derive(Parser, Debug)]
#[command(name = "dataset_split", version)]
pub struct Cli {
    /// Directory holding one subdirectory per class
    #[arg(long, alias = "input_dir_path")]
    pub input_dir_path: PathBuf,

    /// Name of the output directory, created next to the input directory
    #[arg(long, alias = "output_dir")]
    pub output_dir: Option<String>,

    /// Fraction of each class sent to the test split
    #[arg(long, alias = "test_size", default_value_t = 0.2)]
    pub test_size: f64,

    /// Fraction of the non-test remainder sent to the validation split
    #[arg(long, alias = "valid_size", default_value_t = 0.2)]
    pub valid_size: f64,

    /// Shuffle files before each cut
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub shuffle: bool,

    /// Seed for reproducible shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sort file names before splitting
    #[arg(long)]
    pub sort: bool,

    /// Fail a class instead of replacing files already at the destination
    #[arg(long)]
    pub no_overwrite: bool,

    /// Only split files with an image extension
    #[arg(long)]
    pub images_only: bool,
}

impl Cli {
    pub fn output_root(&self) -> PathBuf {
        resolve_output_root(&self.input_dir_path, self.output_dir.as_deref())
    }
}

pub const DEFAULT_LOG_FILTER: &str = "dataset_split=info";

/// `RUST_LOG` when it is set and parses, otherwise `dataset_split=info`.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

impl From<&Cli> for SplitConfig {
    fn from(cli: &Cli) -> Self {
        SplitConfig {
            test_ratio: cli.test_size,
            valid_ratio: cli.valid_size,
            shuffle: cli.shuffle,
            shuffle_seed: cli.seed,
            sort_dataset: cli.sort,
            overwrite: !cli.no_overwrite,
            images_only: cli.images_only,
        }
    }
}
