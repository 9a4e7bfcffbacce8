use std::path::{Path, PathBuf};

use crate::types::{Result, WizardError};

pub const PDF_MIME: &str = "application/pdf";

/// A file the user picked for a PDF operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime: String,
    pub path: Option<PathBuf>,
}

impl PdfFile {
    /// Build from a name and a MIME type reported by the picker. An empty MIME
    /// is guessed from the name.
    pub fn new(name: impl Into<String>, size_bytes: u64, mime: impl Into<String>) -> Self {
        let name = name.into();
        let mut mime = mime.into();
        if mime.is_empty() {
            mime = guess_mime(Path::new(&name));
        }
        Self {
            name,
            size_bytes,
            mime,
            path: None,
        }
    }

    /// Describe a file on disk. The MIME type is guessed from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;
        Ok(Self::at_path(path, metadata.len()))
    }

    /// Like [`PdfFile::from_path`] with an already known size.
    pub fn at_path(path: impl AsRef<Path>, size_bytes: u64) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            name,
            size_bytes,
            mime: guess_mime(path),
            path: Some(path.to_path_buf()),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.mime == PDF_MIME
    }

    /// Reject anything that isn't `application/pdf`.
    pub fn ensure_pdf(&self) -> Result<()> {
        if self.is_pdf() {
            Ok(())
        } else {
            Err(WizardError::UnsupportedFileType {
                name: self.name.clone(),
                mime: self.mime.clone(),
            })
        }
    }

    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }

    /// Size as shown next to the file name, e.g. `1.50 MB`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_mb())
    }
}

fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime(Path::new("report.pdf")), PDF_MIME);
        assert_eq!(guess_mime(Path::new("REPORT.PDF")), PDF_MIME);
        assert_eq!(guess_mime(Path::new("notes")), "application/octet-stream");
    }
}
