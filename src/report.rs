//! Report views over a parsed log, in the shape written by the command line tool

use crate::error::{Error, Result};
use crate::game::{MatchId, MatchStats};
use crate::parser::ParsedLog;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};
use std::io::Write;

/// Report key of a match, zero padded to two digits (`game_01`)
pub fn match_label(id: MatchId) -> String {
    format!("game_{:02}", id.0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub total_kills: u32,
    /// Sorted by name
    pub players: Vec<String>,
    pub kills: BTreeMap<String, i32>,
}

impl From<&MatchStats> for MatchReport {
    fn from(stats: &MatchStats) -> Self {
        MatchReport {
            total_kills: stats.total_kills,
            players: stats.players.iter().cloned().collect(),
            kills: stats.kills.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KillsByMeansReport {
    pub kills_by_means: BTreeMap<String, u32>,
}

impl From<&MatchStats> for KillsByMeansReport {
    fn from(stats: &MatchStats) -> Self {
        KillsByMeansReport {
            kills_by_means: stats.kills_by_means.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerScore {
    pub player: String,
    pub kills: i32,
}

/// Net kills per player summed over all matches, best first
///
/// Players with equal scores are ordered by name.
pub fn player_ranking(log: &ParsedLog) -> Vec<PlayerScore> {
    let mut totals: HashMap<&str, i32> = HashMap::new();
    for (_, stats) in log.iter() {
        for (player, kills) in &stats.kills {
            *totals.entry(player.as_str()).or_default() += kills;
        }
    }

    let mut ranking: Vec<PlayerScore> = totals
        .into_iter()
        .map(|(player, kills)| PlayerScore {
            player: player.to_string(),
            kills,
        })
        .collect();
    ranking.sort_by(|a, b| b.kills.cmp(&a.kills).then_with(|| a.player.cmp(&b.player)));
    ranking
}

/// Reports keyed by [`match_label`], so maps are ordered by label rather than by match number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub match_reports: BTreeMap<String, MatchReport>,
    pub kill_by_means_reports: BTreeMap<String, KillsByMeansReport>,
    pub player_ranking: Vec<PlayerScore>,
}

impl Report {
    pub fn new(log: &ParsedLog) -> Self {
        Report {
            match_reports: log
                .iter()
                .map(|(id, stats)| (match_label(id), stats.into()))
                .collect(),
            kill_by_means_reports: log
                .iter()
                .map(|(id, stats)| (match_label(id), stats.into()))
                .collect(),
            player_ranking: player_ranking(log),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.match_reports.is_empty()
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer).map_err(Error::Write)?;
        writer.flush().map_err(Error::Write)
    }

    /// Human readable overview of the first `limit` matches, in label order
    pub fn summary(&self, limit: usize) -> Summary<'_> {
        Summary {
            report: self,
            limit,
        }
    }
}

pub struct Summary<'a> {
    report: &'a Report,
    limit: usize,
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.report.is_empty() {
            return writeln!(f, "No match reports found.");
        }

        for (game, report) in self.report.match_reports.iter().take(self.limit) {
            writeln!(f, "Game: {}", game)?;
            writeln!(f, "  Total Kills: {}", report.total_kills)?;
            writeln!(f, "  Players: [{}]", report.players.join(", "))?;
            writeln!(f, "  Kills:")?;
            for (player, kills) in &report.kills {
                writeln!(f, "    {}: {}", player, kills)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
