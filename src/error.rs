use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open logfile {}: {source}", path.display())]
    SourceUnavailable { path: PathBuf, source: io::Error },
    #[error("Failed to read logfile: {0}")]
    Read(#[source] io::Error),
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write report: {0}")]
    Write(#[source] io::Error),
}

/// A line that carries the kill marker but doesn't have the shape of a kill event.
///
/// These never abort a parse, they are collected next to the parsed matches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed kill event on line {line_number}: \"{line}\"")]
pub struct MalformedKillLine {
    pub line_number: usize,
    pub line: String,
}

pub type Result<O, E = Error> = std::result::Result<O, E>;
