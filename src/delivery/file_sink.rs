//! File-system delivery sink

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::{debug, info};

use crate::export::errors::ExportResult;
use crate::export::payload::NamedPayload;

use super::sink::DeliverySink;

/// Delivers payloads as files in an output directory
///
/// Bytes are first written to a `<name>.part` file which is renamed into
/// place once fully flushed. The part file is removed on every failure
/// path, so an interrupted delivery never leaves a partial artifact
/// behind.
pub struct FileSink {
    out_dir: PathBuf,
}

impl FileSink {
    /// Create a sink writing into the given directory
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        FileSink {
            out_dir: out_dir.into(),
        }
    }

    /// Directory this sink writes into
    pub fn out_dir(&self) -> &PathBuf {
        &self.out_dir
    }
}

/// Removes the part file unless delivery completed
struct PartFileGuard {
    path: PathBuf,
    released: bool,
}

impl PartFileGuard {
    fn new(path: PathBuf) -> Self {
        PartFileGuard {
            path,
            released: false,
        }
    }

    fn release(&mut self) {
        self.released = true;
    }
}

impl Drop for PartFileGuard {
    fn drop(&mut self) {
        if !self.released {
            debug!("removing partial file {}", self.path.display());
            let _ = fs::remove_file(&self.path);
        }
    }
}

impl DeliverySink for FileSink {
    fn deliver(&mut self, payload: &NamedPayload) -> ExportResult<()> {
        fs::create_dir_all(&self.out_dir)?;

        let final_path = self.out_dir.join(&payload.file_name);
        let part_path = self.out_dir.join(format!("{}.part", payload.file_name));

        let mut guard = PartFileGuard::new(part_path.clone());
        {
            let file = File::create(&part_path)?;
            let mut writer = BufWriter::new(file);
            writer.write_all(&payload.bytes)?;
            writer.flush()?;
        }
        fs::rename(&part_path, &final_path)?;
        guard.release();

        info!(
            "delivered {} ({} bytes, {})",
            final_path.display(),
            payload.len(),
            payload.mime_type
        );
        Ok(())
    }
}
