use crate::adapters::memory::InMemoryLedger;
use crate::domain::{LedgerError, Selector};
use crate::ports::{KeyValue, LedgerStore};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File-backed ledger for the local runtime.
///
/// Every write rewrites the whole snapshot to a temp file and renames it
/// over the previous one, so a crash leaves either the old or the new state.
/// Format: `[key_len:u32 le][key][value_len:u32 le][value]...` in key order.
#[derive(Debug)]
pub struct FileBackedLedger {
    state: InMemoryLedger,
    path: PathBuf,
}

impl FileBackedLedger {
    /// Open the snapshot at `path`, starting empty if the file is absent.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LedgerError> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let state = Self::load_from_file(&path)?;
            info!(path = %path.display(), keys = state.len(), "Loaded ledger snapshot");
            state
        } else {
            info!(path = %path.display(), "No ledger snapshot, starting empty");
            InMemoryLedger::new()
        };
        Ok(Self { state, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    fn load_from_file(path: &Path) -> Result<InMemoryLedger, LedgerError> {
        let mut bytes = Vec::new();
        std::fs::File::open(path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .map_err(io_error)?;

        let mut entries = Vec::new();
        let mut cursor = 0;
        while cursor < bytes.len() {
            let key = read_chunk(&bytes, &mut cursor)?;
            let value = read_chunk(&bytes, &mut cursor)?;
            let key = String::from_utf8(key.to_vec()).map_err(|e| LedgerError::Corruption {
                message: format!("non UTF-8 key at offset {cursor}: {e}"),
            })?;
            entries.push((key, value.to_vec()));
        }
        Ok(InMemoryLedger::from_entries(entries))
    }

    fn save_to_file(&self) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_error)?;
            }
        }

        let mut bytes = Vec::new();
        for (key, value) in self.state.iter() {
            bytes.extend_from_slice(&(key.len() as u32).to_le_bytes());
            bytes.extend_from_slice(key.as_bytes());
            bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
            bytes.extend_from_slice(value);
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(io_error)?;
        file.write_all(&bytes).map_err(io_error)?;
        file.sync_all().map_err(io_error)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_error)?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Persisted ledger snapshot");
        Ok(())
    }

    /// Save the snapshot. On failure `key` is put back to `previous` so the
    /// in-memory state keeps matching the file.
    fn persist_or_revert(&mut self, key: &str, previous: Option<Vec<u8>>) -> Result<(), LedgerError> {
        let Err(err) = self.save_to_file() else {
            return Ok(());
        };
        warn!(path = %self.path.display(), key = %key, error = %err, "Snapshot write failed, reverting");
        match previous {
            Some(value) => self.state.put_state(key, &value)?,
            None => self.state.del_state(key)?,
        }
        Err(err)
    }
}

fn read_chunk<'a>(bytes: &'a [u8], cursor: &mut usize) -> Result<&'a [u8], LedgerError> {
    let corrupt = |what: &str, at: usize| LedgerError::Corruption {
        message: format!("truncated {what} at offset {at}"),
    };
    let len_bytes: [u8; 4] = bytes
        .get(*cursor..*cursor + 4)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| corrupt("length", *cursor))?;
    *cursor += 4;
    let len = u32::from_le_bytes(len_bytes) as usize;
    let chunk = bytes
        .get(*cursor..*cursor + len)
        .ok_or_else(|| corrupt("payload", *cursor))?;
    *cursor += len;
    Ok(chunk)
}

fn io_error(e: std::io::Error) -> LedgerError {
    LedgerError::Io {
        message: e.to_string(),
    }
}

impl LedgerStore for FileBackedLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        self.state.get_state(key)
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        let previous = self.state.get_state(key)?;
        self.state.put_state(key, value)?;
        self.persist_or_revert(key, previous)
    }

    fn del_state(&mut self, key: &str) -> Result<(), LedgerError> {
        let previous = self.state.get_state(key)?;
        self.state.del_state(key)?;
        self.persist_or_revert(key, previous)
    }

    fn get_state_by_range(&self, start: &str, end: &str) -> Result<Vec<KeyValue>, LedgerError> {
        self.state.get_state_by_range(start, end)
    }

    fn get_query_result(&self, selector: &Selector) -> Result<Vec<KeyValue>, LedgerError> {
        self.state.get_query_result(selector)
    }
}
