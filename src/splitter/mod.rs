pub mod config;
pub mod dataset_split;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod partition;
pub mod report;
pub mod splitter;
