//! Seam between report parsing and the AI vendor.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::extraction::{ExtractionError, ExtractionResult};

const SUPPORTED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp", "image/gif"];

/// An uploaded lab report (PDF or image).
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ReportFile {
    /// Build a report file, rejecting empty and non-PDF/image content.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> ExtractionResult<Self> {
        let file = Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        };
        file.validate()?;
        Ok(file)
    }

    /// Read a report from disk, guessing the MIME type from the extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ExtractionResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("report")
            .to_string();
        Self::new(file_name, mime_type, bytes)
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type == "application/pdf"
    }

    /// Raster formats the AI service accepts as image input.
    pub fn is_image(&self) -> bool {
        SUPPORTED_IMAGE_TYPES.contains(&self.mime_type.as_str())
    }

    fn validate(&self) -> ExtractionResult<()> {
        if self.bytes.is_empty() {
            return Err(ExtractionError::UnsupportedFile(format!(
                "{} is empty",
                self.file_name
            )));
        }
        if !self.is_pdf() && !self.is_image() {
            return Err(ExtractionError::UnsupportedFile(format!(
                "{} has type {}, expected a PDF or an image",
                self.file_name, self.mime_type
            )));
        }
        Ok(())
    }
}

/// A file stored on the AI service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub id: String,
    pub mime_type: String,
}

impl UploadedFile {
    /// Raster formats the AI service accepts as image input.
    pub fn is_image(&self) -> bool {
        SUPPORTED_IMAGE_TYPES.contains(&self.mime_type.as_str())
    }
}

/// Structured-output generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub schema_name: String,
    pub schema: Value,
}

/// AI service able to read an attached file and return schema-constrained JSON.
#[async_trait]
pub trait ExtractionBackend: Send + Sync {
    /// Upload a report for use as a model attachment.
    async fn upload_file(&self, file: &ReportFile) -> ExtractionResult<UploadedFile>;

    /// Run the generation against an uploaded file, returning the raw output text.
    async fn generate(
        &self,
        file: &UploadedFile,
        request: &GenerationRequest,
    ) -> ExtractionResult<String>;

    /// Remove an uploaded file.
    async fn delete_file(&self, file: &UploadedFile) -> ExtractionResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_report_file_validation() {
        assert!(ReportFile::new("a.pdf", "application/pdf", vec![1, 2, 3]).is_ok());
        assert!(ReportFile::new("a.jpg", "image/jpeg", vec![1]).unwrap().is_image());

        assert!(matches!(
            ReportFile::new("a.pdf", "application/pdf", vec![]),
            Err(ExtractionError::UnsupportedFile(_))
        ));
        assert!(matches!(
            ReportFile::new("a.csv", "text/csv", vec![1]),
            Err(ExtractionError::UnsupportedFile(_))
        ));
    }

    #[test]
    fn test_only_raster_images_accepted() {
        for mime in ["image/png", "image/jpeg", "image/webp", "image/gif"] {
            assert!(ReportFile::new("scan", mime, vec![1]).unwrap().is_image(), "{mime}");
        }
        for mime in ["image/svg+xml", "image/tiff", "image/heic"] {
            assert!(
                matches!(
                    ReportFile::new("scan", mime, vec![1]),
                    Err(ExtractionError::UnsupportedFile(_))
                ),
                "{mime}"
            );
        }
    }

    #[test]
    fn test_from_path_guesses_mime() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.4").unwrap();

        let report = ReportFile::from_path(file.path()).unwrap();
        assert!(report.is_pdf());
        assert!(report.file_name.ends_with(".pdf"));
        assert_eq!(report.bytes, b"%PDF-1.4");
    }

    #[test]
    fn test_from_path_missing_file() {
        assert!(matches!(
            ReportFile::from_path("/nonexistent/report.pdf"),
            Err(ExtractionError::Io(_))
        ));
    }
}
