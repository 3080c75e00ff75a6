use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;

use crate::models::CallRecord;

const HEADER: [&str; 6] = ["timestamp", "caller", "call_sid", "direction", "intent", "query"];

/// Append-only CSV call log. Records are never rewritten or deleted; the
/// only atomicity the file needs is that concurrent appends do not
/// interleave, which the mutex provides for this process.
pub struct AuditLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Best-effort append. A failed write is logged and dropped; the audit
    /// trail must never abort a phone call.
    pub fn append(&self, record: &CallRecord) {
        if let Err(e) = self.try_append(record) {
            tracing::warn!(error = %e, path = %self.path.display(), "failed to append call record");
        }
    }

    fn try_append(&self, record: &CallRecord) -> anyhow::Result<()> {
        let _guard = self.lock.lock().unwrap();

        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if is_new {
            writer.write_record(HEADER).context("failed to write header")?;
        }
        writer.serialize(record).context("failed to write record")?;
        writer.flush().context("failed to flush record")?;
        Ok(())
    }

    /// Full read-back for the dashboard endpoints. Missing file means no
    /// calls yet; rows that fail to parse are skipped.
    pub fn read_all(&self) -> Vec<CallRecord> {
        let _guard = self.lock.lock().unwrap();

        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return Vec::new(),
        };

        csv::Reader::from_reader(file).deserialize().flatten().collect()
    }
}
