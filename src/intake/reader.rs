//! Upload validation and local file reading

use super::classifier::IntakeConfig;
use crate::error::{NoteSnapError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// A file handed over by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upload {
    pub filename: String,
    /// Media type declared by the client, if any
    #[serde(default)]
    pub content_type: Option<String>,
    pub content: String,
}

/// Turns uploads and local files into documents
#[derive(Debug, Clone, Default)]
pub struct FileIntake {
    config: IntakeConfig,
}

impl FileIntake {
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    fn check(&self, filename: &str, declared_type: &str, size: usize) -> Result<()> {
        if !self.config.is_text_like(filename, declared_type) {
            return Err(NoteSnapError::UnsupportedFile {
                filename: filename.to_string(),
            });
        }

        if size > self.config.max_upload_bytes {
            return Err(NoteSnapError::UploadTooLarge {
                size,
                max: self.config.max_upload_bytes,
            });
        }

        Ok(())
    }

    /// Validate an upload and return its text
    pub fn accept(&self, upload: Upload) -> Result<String> {
        let declared = upload.content_type.as_deref().unwrap_or("");
        self.check(&upload.filename, declared, upload.content.len())?;

        debug!("Accepted upload {} ({} bytes)", upload.filename, upload.content.len());
        Ok(upload.content)
    }

    /// Read a local file, classifying it by name only
    pub async fn read_path(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let metadata = tokio::fs::metadata(path).await?;
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        self.check(&filename, "", size)?;

        let text = tokio::fs::read_to_string(path).await?;
        info!("Read {} ({} bytes)", path.display(), text.len());
        Ok(text)
    }
}
