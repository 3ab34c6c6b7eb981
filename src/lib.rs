//! Split a directory of class folders into `train`, `valid` and `test` copies.

pub mod cli;
pub mod splitter;

pub use splitter::config::SplitConfig;
pub use splitter::dataset_split::DatasetSplit;
pub use splitter::error::SplitError;
pub use splitter::layout::{resolve_output_root, OutputLayout};
pub use splitter::partition::{cut_index, partition, Partition};
pub use splitter::report::{print_split_report, ClassOutcome, ClassSummary, SplitReport};
pub use splitter::splitter::DatasetSplitter;
