//! File-based Feedback Archive Adapter
//!
//! Writes the ranked collection as `{ "feedback": [ ...entries ] }`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::feedback::FeedbackEntry;
use crate::ports::{FeedbackArchive, StoreError};

/// File name of the archive inside the data directory.
pub const FEEDBACK_FILE: &str = "feedback.json";

#[derive(Serialize)]
struct ArchiveDocumentRef<'a> {
    feedback: &'a [FeedbackEntry],
}

#[derive(Deserialize)]
struct ArchiveDocument {
    #[serde(default)]
    feedback: Vec<FeedbackEntry>,
}

/// JSON file archive for feedback entries
#[derive(Debug, Clone)]
pub struct FileFeedbackArchive {
    base_path: PathBuf,
}

impl FileFeedbackArchive {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn file_path(&self) -> PathBuf {
        self.base_path.join(FEEDBACK_FILE)
    }
}

#[async_trait]
impl FeedbackArchive for FileFeedbackArchive {
    async fn save_snapshot(&self, entries: &[FeedbackEntry]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path).await?;

        let json = serde_json::to_string_pretty(&ArchiveDocumentRef { feedback: entries })?;
        fs::write(self.file_path(), json).await?;

        Ok(())
    }

    async fn load_snapshot(&self) -> Result<Vec<FeedbackEntry>, StoreError> {
        let file_path = self.file_path();
        if !file_path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&file_path).await?;
        let document: ArchiveDocument = serde_json::from_str(&json)?;
        Ok(document.feedback)
    }
}
