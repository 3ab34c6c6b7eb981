use anyhow::{Context, Result};
use clap::Parser;

use dataset_split::cli::{log_filter, Cli};
use dataset_split::{print_split_report, DatasetSplitter, SplitConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();
    let output_root = cli.output_root();

    let splitter = DatasetSplitter::new(&cli.input_dir_path, &output_root, SplitConfig::from(&cli))
        .with_context(|| format!("cannot split {}", cli.input_dir_path.display()))?;
    let report = splitter
        .run()
        .with_context(|| format!("failed to write {}", output_root.display()))?;

    print_split_report(&report);

    Ok(())
}
