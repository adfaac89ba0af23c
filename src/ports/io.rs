//! State I/O port for reading and writing state documents.

use std::fmt;
use std::path::PathBuf;

/// Where a state document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateSource {
    /// The process's standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl StateSource {
    /// Builds a source from a raw command-line value; `-` selects stdin.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for StateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "standard input"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where a state document is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateSink {
    /// The process's standard output.
    Stdout,
    /// A file on disk.
    File(PathBuf),
}

impl StateSink {
    /// Builds a sink from a raw command-line value; `-` selects stdout.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for StateSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "standard output"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Provides access to state document storage.
///
/// Abstracting state I/O allows tests to exercise full commands against
/// in-memory documents without touching the real disk or the process's
/// standard streams.
pub trait StateIo: Send + Sync {
    /// Reads the entire contents of a source as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not exist, cannot be read, or is
    /// not valid UTF-8.
    fn read_to_string(
        &self,
        source: &StateSource,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Writes the given contents to a sink, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(
        &self,
        sink: &StateSink,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
