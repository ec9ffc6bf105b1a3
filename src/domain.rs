pub mod navigation;

use crate::error::{DirmanError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Type label shown for subdirectories
pub const DIRECTORY_LABEL: &str = "directory";

/// Type label for files without an extension
pub const GENERIC_FILE_LABEL: &str = "File";

/// Known extensions and their type labels. Lookups are case-insensitive;
/// anything not listed falls back to `"<EXT> File"`.
const FILE_TYPE_LABELS: &[(&str, &str)] = &[
    ("txt", "Text File"),
    ("rs", "Rust File"),
    ("jpg", "Image File"),
    ("jpeg", "Image File"),
    ("png", "Image File"),
    ("gif", "Image File"),
];

/// Returns the type label for a file extension (without the leading dot)
pub fn file_type_label(ext: &str) -> String {
    if ext.is_empty() {
        return GENERIC_FILE_LABEL.to_string();
    }

    let lowered = ext.to_lowercase();
    FILE_TYPE_LABELS
        .iter()
        .find(|(known, _)| *known == lowered)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| format!("{} File", ext.to_uppercase()))
}

/// One immediate child of a listed directory
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    /// Name as shown in the view. Also used to rebuild the on-disk path,
    /// so it is never decorated.
    pub name: String,
    pub is_directory: bool,
    pub file_type: String,
    /// Size in KiB, `None` for directories
    pub size_kib: Option<f64>,
}

impl DirectoryEntry {
    /// Builds an entry by inspecting `path` on disk.
    ///
    /// Symlinks are followed; a dangling link is described by its own metadata.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path).or_else(|_| fs::symlink_metadata(path))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        if metadata.is_dir() {
            return Ok(DirectoryEntry {
                name,
                is_directory: true,
                file_type: DIRECTORY_LABEL.to_string(),
                size_kib: None,
            });
        }

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        Ok(DirectoryEntry {
            name,
            is_directory: false,
            file_type: file_type_label(extension),
            size_kib: Some(metadata.len() as f64 / 1024.0),
        })
    }

    /// Size column text: two decimals for files, blank for directories
    pub fn size_display(&self) -> String {
        self.size_kib
            .map(|kib| format!("{:.2}", kib))
            .unwrap_or_default()
    }
}

/// Lists the immediate children of `dir` in the order the OS returns them.
///
/// Either every entry is returned or the whole call fails; a listing is
/// never partially populated.
pub fn list_directory(dir: &Path) -> Result<Vec<DirectoryEntry>> {
    let entries = fs::read_dir(dir).map_err(|e| DirmanError::from_listing(dir, e))?;

    entries
        .map(|entry_result| {
            let entry = entry_result.map_err(|e| DirmanError::from_listing(dir, e))?;
            DirectoryEntry::from_path(&entry.path()).map_err(|e| DirmanError::from_listing(dir, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod file_type_tests {
        use super::*;

        #[test]
        fn test_known_extensions() {
            assert_eq!(file_type_label("txt"), "Text File");
            assert_eq!(file_type_label("rs"), "Rust File");
            assert_eq!(file_type_label("jpg"), "Image File");
            assert_eq!(file_type_label("jpeg"), "Image File");
            assert_eq!(file_type_label("png"), "Image File");
            assert_eq!(file_type_label("gif"), "Image File");
        }

        #[test]
        fn test_case_insensitive() {
            assert_eq!(file_type_label("TXT"), "Text File");
            assert_eq!(file_type_label("Png"), "Image File");
            assert_eq!(file_type_label("RS"), "Rust File");
        }

        #[test]
        fn test_unknown_extension_is_uppercased() {
            assert_eq!(file_type_label("xyz"), "XYZ File");
            assert_eq!(file_type_label("pdf"), "PDF File");
            assert_eq!(file_type_label("Md"), "MD File");
        }

        #[test]
        fn test_no_extension() {
            assert_eq!(file_type_label(""), "File");
        }
    }

    mod directory_entry_tests {
        use super::*;
        use tempfile::TempDir;

        #[test]
        fn test_text_file_size() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("notes.txt");
            fs::write(&path, vec![b'a'; 2048]).unwrap();

            let entry = DirectoryEntry::from_path(&path).unwrap();

            assert_eq!(entry.name, "notes.txt");
            assert!(!entry.is_directory);
            assert_eq!(entry.file_type, "Text File");
            assert_eq!(entry.size_display(), "2.00");
        }

        #[test]
        fn test_unknown_extension_size() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("data.xyz");
            fs::write(&path, vec![0u8; 512]).unwrap();

            let entry = DirectoryEntry::from_path(&path).unwrap();

            assert_eq!(entry.file_type, "XYZ File");
            assert_eq!(entry.size_display(), "0.50");
        }

        #[test]
        fn test_directory_has_no_size() {
            let temp_dir = TempDir::new().unwrap();
            let sub = temp_dir.path().join("sub");
            fs::create_dir(&sub).unwrap();
            fs::write(sub.join("big.bin"), vec![0u8; 8192]).unwrap();

            let entry = DirectoryEntry::from_path(&sub).unwrap();

            assert!(entry.is_directory);
            assert_eq!(entry.file_type, DIRECTORY_LABEL);
            assert_eq!(entry.size_kib, None);
            assert_eq!(entry.size_display(), "");
        }

        #[test]
        fn test_file_without_extension() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("Makefile");
            fs::write(&path, b"all:").unwrap();

            let entry = DirectoryEntry::from_path(&path).unwrap();
            assert_eq!(entry.file_type, "File");
        }

        #[test]
        fn test_nonexistent_path() {
            let result = DirectoryEntry::from_path(Path::new("/nonexistent/file.txt"));
            assert!(result.is_err());
        }

        #[cfg(unix)]
        #[test]
        fn test_dangling_symlink_is_a_file() {
            let temp_dir = TempDir::new().unwrap();
            let link = temp_dir.path().join("broken.txt");
            std::os::unix::fs::symlink(temp_dir.path().join("missing"), &link).unwrap();

            let entry = DirectoryEntry::from_path(&link).unwrap();
            assert!(!entry.is_directory);
            assert_eq!(entry.file_type, "Text File");
        }
    }

    mod listing_tests {
        use super::*;
        use tempfile::TempDir;

        #[test]
        fn test_one_entry_per_child() {
            let temp_dir = TempDir::new().unwrap();
            let dir = temp_dir.path();
            fs::write(dir.join("a.txt"), b"a").unwrap();
            fs::write(dir.join("b.rs"), b"fn main() {}").unwrap();
            fs::write(dir.join(".hidden"), b"h").unwrap();
            fs::create_dir(dir.join("sub")).unwrap();
            fs::write(dir.join("sub").join("nested.txt"), b"n").unwrap();

            let entries = list_directory(dir).unwrap();

            let mut names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
            names.sort();
            assert_eq!(names, vec![".hidden", "a.txt", "b.rs", "sub"]);

            for entry in &entries {
                assert_eq!(entry.is_directory, dir.join(&entry.name).is_dir());
            }
        }

        #[test]
        fn test_empty_directory() {
            let temp_dir = TempDir::new().unwrap();
            assert!(list_directory(temp_dir.path()).unwrap().is_empty());
        }

        #[test]
        fn test_missing_directory() {
            let result = list_directory(Path::new("/nonexistent/dirman/dir"));
            assert!(matches!(
                result,
                Err(DirmanError::EnumerationFailure { .. })
            ));
        }

        #[test]
        fn test_listing_a_file_fails() {
            let temp_dir = TempDir::new().unwrap();
            let file = temp_dir.path().join("plain.txt");
            fs::write(&file, b"x").unwrap();

            assert!(matches!(
                list_directory(&file),
                Err(DirmanError::EnumerationFailure { .. })
            ));
        }

        #[cfg(unix)]
        #[test]
        fn test_unreadable_directory() {
            use std::os::unix::fs::PermissionsExt;

            let temp_dir = TempDir::new().unwrap();
            let locked = temp_dir.path().join("locked");
            fs::create_dir(&locked).unwrap();
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

            // Privileged users bypass the mode bits
            if fs::read_dir(&locked).is_ok() {
                fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
                return;
            }

            let result = list_directory(&locked);
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

            assert!(matches!(result, Err(DirmanError::PermissionDenied { .. })));
        }
    }
}
