use std::path::Path;

use crate::utils::constants::{ALLOWED_EXTENSIONS, MAX_CONTENT_LENGTH};

/// Check whether an uploaded file name carries one of the accepted extensions.
pub fn is_allowed_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Check an upload before it is stored, returning the reason it is refused.
pub fn validate_upload(filename: &str, content_length: u64) -> Result<(), String> {
    if !is_allowed_file(filename) {
        return Err(format!("File type not allowed: {}", filename));
    }
    if content_length > MAX_CONTENT_LENGTH {
        return Err("File size exceeds 10MB limit".to_string());
    }
    Ok(())
}

/// Render a byte count the way the file listing shows it, e.g. `1.50 KB`.
pub fn format_file_size(size: u64) -> String {
    if size == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = size as f64;
    for unit in ["Bytes", "KB", "MB", "GB"] {
        if value < 1024.0 {
            return format!("{:.2} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.2} TB", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_file() {
        assert!(is_allowed_file("report.pdf"));
        assert!(is_allowed_file("site.JPEG"));
        assert!(is_allowed_file("archive.tar.png"));
        assert!(!is_allowed_file("notes.docx"));
        assert!(!is_allowed_file("pdf"));
        assert!(!is_allowed_file(""));
    }

    #[test]
    fn test_validate_upload() {
        assert!(validate_upload("intake.jpg", 1024).is_ok());
        assert_eq!(
            validate_upload("intake.exe", 10),
            Err("File type not allowed: intake.exe".to_string())
        );
        assert_eq!(
            validate_upload("intake.pdf", MAX_CONTENT_LENGTH + 1),
            Err("File size exceeds 10MB limit".to_string())
        );
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512.00 Bytes");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10.00 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 * 1024), "3.00 TB");
    }
}
