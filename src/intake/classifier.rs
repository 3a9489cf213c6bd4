//! Text-file classification by declared media type or filename extension

use serde::{Deserialize, Serialize};

/// Intake limits and the text-like allow lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Media types accepted regardless of filename
    #[serde(default = "default_text_mime_types")]
    pub text_mime_types: Vec<String>,

    /// Extensions (with leading dot) accepted when the media type is not
    #[serde(default = "default_text_extensions")]
    pub text_extensions: Vec<String>,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_text_mime_types() -> Vec<String> {
    [
        "text/plain",
        "text/html",
        "text/css",
        "text/javascript",
        "application/json",
        "application/xml",
        "text/markdown",
        "text/csv",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_text_extensions() -> Vec<String> {
    [".txt", ".md", ".json", ".js", ".ts", ".html", ".css", ".csv", ".xml"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_max_upload_bytes() -> usize { 10 * 1024 * 1024 }

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            text_mime_types: default_text_mime_types(),
            text_extensions: default_text_extensions(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl IntakeConfig {
    /// True when the declared type is allowed, or failing that, the extension is
    pub fn is_text_like(&self, filename: &str, declared_type: &str) -> bool {
        if self.text_mime_types.iter().any(|t| t == declared_type) {
            return true;
        }

        let filename = filename.to_lowercase();
        self.text_extensions.iter().any(|ext| filename.ends_with(ext.as_str()))
    }
}

/// Classify with the default allow lists
pub fn is_text_like(filename: &str, declared_type: &str) -> bool {
    IntakeConfig::default().is_text_like(filename, declared_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_type_wins() {
        assert!(is_text_like("blob.bin", "text/plain"));
        assert!(is_text_like("data", "application/json"));
    }

    #[test]
    fn test_extension_fallback() {
        assert!(is_text_like("notes.md", ""));
        assert!(is_text_like("REPORT.TXT", "application/octet-stream"));
        assert!(is_text_like("script.ts", ""));
    }

    #[test]
    fn test_rejects_binary() {
        assert!(!is_text_like("photo.png", "image/png"));
        assert!(!is_text_like("archive.tar.gz", ""));
        assert!(!is_text_like("txt", ""));
    }

    #[test]
    fn test_declared_type_is_exact_match() {
        assert!(!is_text_like("file", "TEXT/PLAIN"));
        assert!(!is_text_like("file", "text/plain; charset=utf-8"));
    }

    #[test]
    fn test_custom_lists() {
        let config = IntakeConfig {
            text_mime_types: vec!["text/x-log".to_string()],
            text_extensions: vec![".log".to_string()],
            ..IntakeConfig::default()
        };
        assert!(config.is_text_like("server.log", ""));
        assert!(config.is_text_like("x", "text/x-log"));
        assert!(!config.is_text_like("notes.txt", "text/plain"));
    }
}
