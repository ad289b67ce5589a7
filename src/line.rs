use crate::parsing::{find_marker, parse_timestamp, Marker, KILL_PATTERN};
use thiserror::Error;

/// Killer name the server uses for deaths caused by the map itself (falling, lava, triggers)
pub const WORLD: &str = "<world>";

/// A single log line, classified by the marker it carries
#[derive(Debug, PartialEq, Eq)]
pub enum LogLine<'a> {
    MatchStart,
    MatchEnd,
    Kill(KillEvent<'a>),
    Unrecognized,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct KillEvent<'a> {
    /// Seconds since the server started, `None` if it doesn't fit a `u32`
    pub time: Option<u32>,
    pub killer_id: Option<u32>,
    pub victim_id: Option<u32>,
    pub means_id: Option<u32>,
    pub killer: &'a str,
    pub victim: &'a str,
    pub cause: &'a str,
}

impl KillEvent<'_> {
    pub fn is_world_kill(&self) -> bool {
        self.killer == WORLD
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("line contains a kill marker but isn't a valid kill event")]
pub struct InvalidKillEvent;

impl<'a> LogLine<'a> {
    pub fn parse(line: &'a str) -> Result<Self, InvalidKillEvent> {
        Ok(match find_marker(line) {
            Some(Marker::InitGame) => LogLine::MatchStart,
            Some(Marker::ShutdownGame) => LogLine::MatchEnd,
            Some(Marker::Kill) => LogLine::Kill(KillEvent::parse(line)?),
            None => LogLine::Unrecognized,
        })
    }
}

impl<'a> KillEvent<'a> {
    pub fn parse(line: &'a str) -> Result<Self, InvalidKillEvent> {
        let captures = KILL_PATTERN.captures(line).ok_or(InvalidKillEvent)?;
        let text = |index: usize| captures.get(index).map(|group| group.as_str());
        // the numeric fields are informational, a match of the pattern is always a kill
        let id = |index: usize| text(index).and_then(|id| id.parse::<u32>().ok());

        Ok(KillEvent {
            time: text(1).and_then(parse_timestamp),
            killer_id: id(2),
            victim_id: id(3),
            means_id: id(4),
            killer: text(5).ok_or(InvalidKillEvent)?,
            victim: text(6).ok_or(InvalidKillEvent)?,
            cause: text(7).ok_or(InvalidKillEvent)?,
        })
    }
}
