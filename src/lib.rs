pub use crate::error::{Error, MalformedKillLine, Result};
pub use crate::game::{MatchId, MatchStats};
pub use crate::line::{InvalidKillEvent, KillEvent, LogLine, WORLD};
pub use crate::parser::{LogParser, ParsedLog};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

mod error;
mod game;
mod line;
mod parser;
mod parsing;
pub mod report;

/// Parse a log that is fully loaded in memory
pub fn parse(log: &str) -> ParsedLog {
    parse_lines(log.lines())
}

pub fn parse_lines<I, S>(lines: I) -> ParsedLog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = LogParser::new();
    for line in lines {
        parser.handle_line(line.as_ref());
    }
    parser.finish()
}

/// Parse a log from a reader
///
/// A read error aborts the parse, including any match that was still open.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<ParsedLog> {
    let mut parser = LogParser::new();
    for line in reader.lines() {
        parser.handle_line(&line.map_err(Error::Read)?);
    }
    Ok(parser.finish())
}

pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedLog> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file))
}
