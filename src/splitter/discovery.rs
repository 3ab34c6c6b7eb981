use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use super::error::SplitError;

pub struct ExtensionFilter {
    valid_extensions: HashSet<String>,
}

impl ExtensionFilter {
    /// Every extension the `image` crate can decode.
    pub fn images() -> Self {
        let valid_extensions = image::ImageFormat::all()
            .flat_map(|format| format.extensions_str())
            .map(|ext| ext.to_string())
            .collect();

        ExtensionFilter { valid_extensions }
    }

    pub fn is_valid_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.valid_extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }
}

/// Names of the immediate subdirectories of `input_root`, sorted.
/// Plain files at the root are ignored.
pub fn discover_classes(input_root: &Path) -> Result<Vec<OsString>, SplitError> {
    let mut classes = Vec::new();
    for entry in fs::read_dir(input_root).map_err(|e| SplitError::io(input_root, e))? {
        let entry = entry.map_err(|e| SplitError::io(input_root, e))?;
        if !entry.path().is_dir() {
            continue;
        }
        classes.push(entry.file_name());
    }

    // Processing order decides how a seeded rng is consumed, so keep it stable
    classes.sort_unstable();
    Ok(classes)
}

/// Leaf file names directly inside `class_dir`. Nested directories are skipped.
pub fn list_class_files(
    class_dir: &Path,
    filter: Option<&ExtensionFilter>,
    sort: bool,
) -> Result<Vec<OsString>, SplitError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(class_dir).map_err(|e| SplitError::io(class_dir, e))? {
        let entry = entry.map_err(|e| SplitError::io(class_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(filter) = filter {
            if !filter.is_valid_extension(&path) {
                continue;
            }
        }
        files.push(entry.file_name());
    }

    // read_dir order is whatever the filesystem hands back
    if sort {
        files.sort_unstable();
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use super::*;

    #[test]
    fn discovers_only_directories() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("dog")).unwrap();
        fs::create_dir(root.path().join("cat")).unwrap();
        File::create(root.path().join("README.txt")).unwrap();

        let classes = discover_classes(root.path()).unwrap();
        assert_eq!(classes, vec!["cat", "dog"]);
    }

    #[test]
    fn missing_root_is_an_io_error() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("nope");
        assert!(matches!(
            discover_classes(&missing),
            Err(SplitError::Io { .. })
        ));
    }

    #[test]
    fn lists_leaf_files_only() {
        let root = tempfile::tempdir().unwrap();
        File::create(root.path().join("b.png")).unwrap();
        File::create(root.path().join("a.png")).unwrap();
        fs::create_dir(root.path().join("nested")).unwrap();
        File::create(root.path().join("nested").join("c.png")).unwrap();

        let files = list_class_files(root.path(), None, true).unwrap();
        assert_eq!(files, vec!["a.png", "b.png"]);
    }

    #[test]
    fn image_filter_drops_other_extensions() {
        let root = tempfile::tempdir().unwrap();
        File::create(root.path().join("a.PNG")).unwrap();
        File::create(root.path().join("b.jpg")).unwrap();
        File::create(root.path().join("labels.csv")).unwrap();
        File::create(root.path().join("noext")).unwrap();

        let filter = ExtensionFilter::images();
        let files = list_class_files(root.path(), Some(&filter), true).unwrap();
        assert_eq!(files, vec!["a.PNG", "b.jpg"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn keeps_names_that_are_not_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = tempfile::tempdir().unwrap();
        let class = OsStr::from_bytes(b"caf\xe9");
        fs::create_dir(root.path().join(class)).unwrap();
        fs::create_dir(root.path().join("dog")).unwrap();
        let file = OsStr::from_bytes(b"r\xe9sum\xe9.png");
        File::create(root.path().join("dog").join(file)).unwrap();
        File::create(root.path().join("dog").join("ok.png")).unwrap();

        let classes = discover_classes(root.path()).unwrap();
        assert_eq!(classes, vec![class, OsStr::new("dog")]);

        let files = list_class_files(&root.path().join("dog"), None, true).unwrap();
        assert_eq!(files, vec![OsStr::new("ok.png"), file]);
    }
}
