use crate::line::{KillEvent, WORLD};
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

/// Sequence number of a match within a log, the first `InitGame` is match 1
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchId(pub u32);

impl Display for MatchId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "game_{}", self.0)
    }
}

impl Serialize for MatchId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Everything tracked for a single match
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    pub total_kills: u32,
    pub players: BTreeSet<String>,
    /// Net kills per player, world kills subtract from the victim
    pub kills: BTreeMap<String, i32>,
    pub kills_by_means: BTreeMap<String, u32>,
}

impl MatchStats {
    pub fn apply_kill(&mut self, killer: &str, victim: &str, cause: &str) {
        self.total_kills += 1;
        *self.kills_by_means.entry(cause.to_string()).or_default() += 1;

        if killer == WORLD {
            // world kills don't register the victim as a player
            *self.kills.entry(victim.to_string()).or_default() -= 1;
        } else {
            self.players.insert(killer.to_string());
            self.players.insert(victim.to_string());
            *self.kills.entry(killer.to_string()).or_default() += 1;
        }
    }

    pub fn apply(&mut self, event: &KillEvent) {
        self.apply_kill(event.killer, event.victim, event.cause)
    }
}
