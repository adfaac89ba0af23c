//! Live state I/O adapter using `std::fs` and the standard streams.

use std::io::{Read, Write};

use crate::ports::io::{StateIo, StateSink, StateSource};

/// Live adapter backed by real disk and standard-stream I/O.
pub struct LiveStateIo;

impl StateIo for LiveStateIo {
    fn read_to_string(
        &self,
        source: &StateSource,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        match source {
            StateSource::Stdin => {
                let mut contents = String::new();
                std::io::stdin().read_to_string(&mut contents)?;
                Ok(contents)
            }
            StateSource::File(path) => Ok(std::fs::read_to_string(path)?),
        }
    }

    fn write(
        &self,
        sink: &StateSink,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match sink {
            StateSink::Stdout => {
                let mut stdout = std::io::stdout();
                stdout.write_all(contents.as_bytes())?;
                Ok(stdout.flush()?)
            }
            StateSink::File(path) => Ok(std::fs::write(path, contents)?),
        }
    }
}
