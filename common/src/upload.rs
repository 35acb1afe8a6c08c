//! Client-side checks for files attached to a contribution.
//!
//! The API validates again on its side; these checks only spare the user a
//! round trip for files that would certainly be refused.

use std::collections::HashSet;

use thiserror::Error;

pub const MAX_FILES: usize = 10;
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;
pub const ALLOWED_EXTENSIONS: [&str; 8] = ["csv", "xlsx", "xls", "json", "geojson", "pdf", "zip", "txt"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("You can attach at most {max} files ({count} selected).")]
    TooManyFiles { count: usize, max: usize },
    #[error("{name} is empty.")]
    EmptyFile { name: String },
    #[error("{name} is {size}, the limit is {limit}.")]
    FileTooLarge { name: String, size: String, limit: String },
    #[error("{name}: .{extension} files are not accepted.")]
    UnsupportedType { name: String, extension: String },
    #[error("{name} was selected more than once.")]
    DuplicateFile { name: String },
}

/// Name and size of a selected file, independent of the browser `File` type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub size: u64,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Lowercased extension, empty when the name has none.
    pub fn extension(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_files: usize,
    pub max_file_bytes: u64,
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_files: MAX_FILES,
            max_file_bytes: MAX_FILE_BYTES,
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl UploadPolicy {
    /// Value for the `accept` attribute of the file input.
    pub fn accept_attribute(&self) -> String {
        self.allowed_extensions
            .iter()
            .map(|e| format!(".{e}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Reports the first problem found, checking the count before any file.
    pub fn validate(&self, files: &[UploadCandidate]) -> Result<(), UploadError> {
        if files.len() > self.max_files {
            return Err(UploadError::TooManyFiles {
                count: files.len(),
                max: self.max_files,
            });
        }

        let mut seen = HashSet::new();
        for file in files {
            if !seen.insert(file.name.as_str()) {
                return Err(UploadError::DuplicateFile {
                    name: file.name.clone(),
                });
            }
            let extension = file.extension();
            if !self.allowed_extensions.iter().any(|e| *e == extension) {
                return Err(UploadError::UnsupportedType {
                    name: file.name.clone(),
                    extension,
                });
            }
            if file.size == 0 {
                return Err(UploadError::EmptyFile {
                    name: file.name.clone(),
                });
            }
            if file.size > self.max_file_bytes {
                return Err(UploadError::FileTooLarge {
                    name: file.name.clone(),
                    size: format_file_size(file.size),
                    limit: format_file_size(self.max_file_bytes),
                });
            }
        }
        Ok(())
    }
}

/// `512 B`, `1.5 KB`, `2.0 MB`, `1.2 GB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_normal_batch() {
        let files = vec![
            UploadCandidate::new("population.csv", 2_048),
            UploadCandidate::new("boundaries.GeoJSON", 500_000),
        ];
        assert_eq!(UploadPolicy::default().validate(&files), Ok(()));
    }

    #[test]
    fn rejects_each_kind_of_problem() {
        let policy = UploadPolicy::default();

        let many: Vec<_> = (0..11).map(|i| UploadCandidate::new(format!("f{i}.csv"), 1)).collect();
        assert!(matches!(policy.validate(&many), Err(UploadError::TooManyFiles { count: 11, max: 10 })));

        let dup = vec![UploadCandidate::new("a.csv", 1), UploadCandidate::new("a.csv", 2)];
        assert!(matches!(policy.validate(&dup), Err(UploadError::DuplicateFile { .. })));

        let exe = vec![UploadCandidate::new("setup.exe", 1)];
        assert_eq!(
            policy.validate(&exe).unwrap_err().to_string(),
            "setup.exe: .exe files are not accepted."
        );

        let hidden = vec![UploadCandidate::new(".csv", 1)];
        assert!(matches!(policy.validate(&hidden), Err(UploadError::UnsupportedType { .. })));

        let empty = vec![UploadCandidate::new("a.csv", 0)];
        assert!(matches!(policy.validate(&empty), Err(UploadError::EmptyFile { .. })));

        let big = vec![UploadCandidate::new("a.zip", MAX_FILE_BYTES + 1)];
        assert_eq!(
            policy.validate(&big).unwrap_err().to_string(),
            "a.zip is 10.0 MB, the limit is 10.0 MB."
        );
    }

    #[test]
    fn formats_sizes() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1_536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn accept_attribute_lists_extensions() {
        assert!(UploadPolicy::default().accept_attribute().starts_with(".csv,.xlsx"));
    }
}
