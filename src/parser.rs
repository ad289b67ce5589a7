use crate::error::MalformedKillLine;
use crate::game::{MatchId, MatchStats};
use crate::line::LogLine;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// All matches found in a log, keyed by their sequence number
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLog {
    pub matches: BTreeMap<MatchId, MatchStats>,
    #[serde(skip)]
    pub diagnostics: Vec<MalformedKillLine>,
}

impl ParsedLog {
    /// No `InitGame` was found in the log
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn get(&self, id: MatchId) -> Option<&MatchStats> {
        self.matches.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MatchId, &MatchStats)> {
        self.matches.iter().map(|(id, stats)| (*id, stats))
    }
}

/// Line by line state machine that splits a log into matches
///
/// A match is opened by `InitGame` and stored when a `ShutdownGame`, the next `InitGame`
/// or the end of the log is reached. A `ShutdownGame` stores a snapshot but leaves the
/// match open, kills logged after it still count towards that match.
#[derive(Debug, Default)]
pub struct LogParser {
    match_count: u32,
    current: Option<MatchStats>,
    line_number: usize,
    finished: ParsedLog,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_line(&mut self, line: &str) {
        self.line_number += 1;
        match LogLine::parse(line) {
            Ok(LogLine::MatchStart) => {
                self.store_current();
                self.match_count += 1;
                debug!(game = self.match_count, line = self.line_number, "match started");
                self.current = Some(MatchStats::default());
            }
            Ok(LogLine::MatchEnd) => {
                if self.current.is_some() {
                    debug!(game = self.match_count, line = self.line_number, "match ended");
                }
                self.store_current();
            }
            Ok(LogLine::Kill(kill)) => {
                if let Some(current) = self.current.as_mut() {
                    current.apply(&kill);
                }
            }
            Ok(LogLine::Unrecognized) => {}
            Err(_) => {
                let diagnostic = MalformedKillLine {
                    line_number: self.line_number,
                    line: line.to_string(),
                };
                warn!("{}", diagnostic);
                self.finished.diagnostics.push(diagnostic);
            }
        }
    }

    fn store_current(&mut self) {
        if let Some(current) = &self.current {
            self.finished
                .matches
                .insert(MatchId(self.match_count), current.clone());
        }
    }

    /// Id of the match kills are currently counted towards
    pub fn current_match(&self) -> Option<MatchId> {
        self.current.as_ref().map(|_| MatchId(self.match_count))
    }

    pub fn finish(mut self) -> ParsedLog {
        self.store_current();
        self.finished
    }
}
