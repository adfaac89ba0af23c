//! In-memory state I/O adapter.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::io::{StateIo, StateSink, StateSource};

/// In-memory adapter holding documents in a map.
///
/// Tests use this to run full commands without touching the real disk or
/// the standard streams: reads are served from seeded contents and every
/// write is captured for inspection. Cloning yields a second handle onto
/// the same storage, so a test can keep one handle while the service
/// context owns the other.
#[derive(Clone, Default)]
pub struct MemIo {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    stdin: Arc<Mutex<String>>,
    stdout: Arc<Mutex<String>>,
    writes: Arc<Mutex<usize>>,
}

impl MemIo {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file with the given contents.
    pub fn insert_file(&self, path: impl Into<PathBuf>, contents: &str) {
        let mut files = self.files.lock().expect("files lock poisoned");
        files.insert(path.into(), contents.to_string());
    }

    /// Sets the contents served to stdin reads.
    pub fn set_stdin(&self, contents: &str) {
        let mut stdin = self.stdin.lock().expect("stdin lock poisoned");
        contents.clone_into(&mut stdin);
    }

    /// Returns the current contents of a file, if present.
    #[must_use]
    pub fn file(&self, path: &Path) -> Option<String> {
        let files = self.files.lock().expect("files lock poisoned");
        files.get(path).cloned()
    }

    /// Returns everything written to the stdout sink.
    #[must_use]
    pub fn stdout(&self) -> String {
        self.stdout.lock().expect("stdout lock poisoned").clone()
    }

    /// Returns how many writes were performed through this adapter.
    #[must_use]
    pub fn write_count(&self) -> usize {
        *self.writes.lock().expect("writes lock poisoned")
    }
}

impl StateIo for MemIo {
    fn read_to_string(
        &self,
        source: &StateSource,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        match source {
            StateSource::Stdin => Ok(self.stdin.lock().expect("stdin lock poisoned").clone()),
            StateSource::File(path) => {
                let files = self.files.lock().expect("files lock poisoned");
                files
                    .get(path)
                    .cloned()
                    .ok_or_else(|| format!("No such file: {}", path.display()).into())
            }
        }
    }

    fn write(
        &self,
        sink: &StateSink,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        *self.writes.lock().expect("writes lock poisoned") += 1;
        match sink {
            StateSink::Stdout => {
                let mut stdout = self.stdout.lock().expect("stdout lock poisoned");
                stdout.push_str(contents);
            }
            StateSink::File(path) => {
                let mut files = self.files.lock().expect("files lock poisoned");
                files.insert(path.clone(), contents.to_string());
            }
        }
        Ok(())
    }
}
