use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use super::dataset_split::DatasetSplit;
use super::error::SplitError;

/// Output directory next to the input directory. Defaults to `<input_name>_split`.
pub fn resolve_output_root(input_root: &Path, output_dir: Option<&str>) -> PathBuf {
    let name = match output_dir {
        Some(name) => name.to_string(),
        None => {
            let input_name = input_root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "dataset".to_string());
            format!("{}_split", input_name)
        }
    };

    match input_root.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// `<root>/{train,valid,test}/<class>/`
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Creates every split and class directory up front. Existing directories are reused.
    pub fn create(root: &Path, classes: &[OsString]) -> Result<Self, SplitError> {
        let layout = OutputLayout {
            root: root.to_owned(),
        };

        for split in DatasetSplit::ALL {
            let split_dir = layout.split_dir(split);
            fs::create_dir_all(&split_dir).map_err(|e| SplitError::io(&split_dir, e))?;
            for class in classes {
                let class_dir = layout.class_dir(split, class);
                fs::create_dir_all(&class_dir).map_err(|e| SplitError::io(&class_dir, e))?;
            }
        }

        Ok(layout)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn split_dir(&self, split: DatasetSplit) -> PathBuf {
        self.root.join(split.dir_name())
    }

    pub fn class_dir(&self, split: DatasetSplit, class: &OsStr) -> PathBuf {
        self.split_dir(split).join(class)
    }

    pub fn destination(&self, split: DatasetSplit, class: &OsStr, filename: &OsStr) -> PathBuf {
        self.class_dir(split, class).join(filename)
    }
}
