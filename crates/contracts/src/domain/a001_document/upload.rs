//! Client-side upload checks.
//!
//! Advisory only: the backend re-validates every file. A rejected file
//! never leaves the browser.

use thiserror::Error;

/// Largest accepted file, inclusive.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

pub const ALLOWED_EXTENSIONS: [&str; 3] = [".pdf", ".docx", ".txt"];

/// `accept` attribute of the file picker.
pub const ACCEPT_ATTR: &str = ".pdf,.docx,.txt";

/// What the browser tells us about a picked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("unsupported file type")]
    UnsupportedType,
    #[error("file exceeds {} bytes", MAX_UPLOAD_BYTES)]
    TooLarge,
}

impl UploadRejection {
    /// Translation key of the inline message.
    pub fn message_key(&self) -> &'static str {
        match self {
            UploadRejection::UnsupportedType => "privategxt_upload_error_type",
            UploadRejection::TooLarge => "privategxt_upload_error_size",
        }
    }
}

/// Lowercased extension including the dot, taken after the last `.`.
///
/// A name without a dot yields the whole name, which never matches.
pub fn file_extension(name: &str) -> String {
    let last = name.rsplit('.').next().unwrap_or(name);
    format!(".{}", last.to_lowercase())
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Type first, then size. Either the MIME type or the extension may
    /// vouch for the file.
    pub fn validate(&self) -> Result<(), UploadRejection> {
        let type_ok = ALLOWED_MIME_TYPES.contains(&self.mime_type.as_str());
        let ext = file_extension(&self.name);
        let ext_ok = ALLOWED_EXTENSIONS.contains(&ext.as_str());
        if !type_ok && !ext_ok {
            return Err(UploadRejection::UnsupportedType);
        }
        if self.size > MAX_UPLOAD_BYTES {
            return Err(UploadRejection::TooLarge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_lowercased_and_last() {
        assert_eq!(file_extension("Report.PDF"), ".pdf");
        assert_eq!(file_extension("archive.tar.txt"), ".txt");
        assert_eq!(file_extension("README"), ".readme");
    }

    #[test]
    fn test_rejects_unknown_type_and_extension() {
        let c = UploadCandidate::new("slides.pptx", "application/vnd.ms-powerpoint", 1024);
        assert_eq!(c.validate(), Err(UploadRejection::UnsupportedType));
        assert_eq!(
            c.validate().unwrap_err().message_key(),
            "privategxt_upload_error_type"
        );
    }

    #[test]
    fn test_extension_alone_is_enough() {
        // Browsers often report an empty MIME type.
        let c = UploadCandidate::new("notes.TXT", "", 10);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn test_mime_type_alone_is_enough() {
        let c = UploadCandidate::new("download", "application/pdf", 10);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn test_size_boundary() {
        let at_limit = UploadCandidate::new("a.pdf", "application/pdf", MAX_UPLOAD_BYTES);
        assert_eq!(at_limit.validate(), Ok(()));

        let over = UploadCandidate::new("a.pdf", "application/pdf", MAX_UPLOAD_BYTES + 1);
        assert_eq!(over.validate(), Err(UploadRejection::TooLarge));
        assert_eq!(over.validate().unwrap_err().message_key(), "privategxt_upload_error_size");
    }

    #[test]
    fn test_type_checked_before_size() {
        let c = UploadCandidate::new("movie.mp4", "video/mp4", MAX_UPLOAD_BYTES * 5);
        assert_eq!(c.validate(), Err(UploadRejection::UnsupportedType));
    }

    #[test]
    fn test_report_pdf_of_five_megabytes_passes() {
        let c = UploadCandidate::new("report.pdf", "application/pdf", 5 * 1024 * 1024);
        assert!(c.validate().is_ok());
    }
}
