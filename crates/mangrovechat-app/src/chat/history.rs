//! Flat JSON-file chat history persistence.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use mangrovechat_models::ConversationRecord;

/// File name of the persisted history inside the data directory
const HISTORY_FILE: &str = "chat_history.json";

/// Append-only record keeper backed by a single JSON file.
///
/// The whole array is read and rewritten on every mutation. There is no
/// locking: concurrent appenders may lose updates (last-writer-wins at
/// full-file granularity). Single-process, low-concurrency baseline.
pub struct HistoryStore {
    history_path: PathBuf,
}

impl HistoryStore {
    /// Create a store rooted at `data_dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).with_context(|| {
                format!("Failed to create data directory: {}", data_dir.display())
            })?;
        }

        Ok(Self {
            history_path: data_dir.join(HISTORY_FILE),
        })
    }

    /// Load the full history. Returns an empty sequence when no file exists
    /// yet; an unparseable existing file is a storage error and propagates.
    pub fn load(&self) -> Result<Vec<ConversationRecord>> {
        if !self.history_path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.history_path).with_context(|| {
            format!("Failed to read history from {}", self.history_path.display())
        })?;

        let records: Vec<ConversationRecord> =
            serde_json::from_str(&json).context("Failed to deserialize chat history")?;

        Ok(records)
    }

    /// Append one record stamped with the current local time and rewrite the
    /// file. Not atomic: a crash between load and write loses nothing already
    /// on disk but can drop a concurrent append.
    pub fn append(&self, question: &str, answer: &str) -> Result<ConversationRecord> {
        let mut records = self.load()?;

        let record = ConversationRecord {
            timestamp: chrono::Local::now().to_rfc3339(),
            question: question.to_string(),
            answer: answer.to_string(),
        };
        records.push(record.clone());

        self.write(&records)?;
        Ok(record)
    }

    /// Discard all records irreversibly.
    pub fn clear(&self) -> Result<()> {
        self.write(&[])
    }

    /// Number of stored records.
    pub fn count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    fn write(&self, records: &[ConversationRecord]) -> Result<()> {
        let json =
            serde_json::to_string_pretty(records).context("Failed to serialize chat history")?;

        fs::write(&self.history_path, json).with_context(|| {
            format!("Failed to write history to {}", self.history_path.display())
        })?;

        Ok(())
    }
}
