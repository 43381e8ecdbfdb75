use crate::game::board::Mark;

/// A player in the current match, carrying the score accumulated across
/// rematches.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    mark: Mark,
    score: u32,
}

impl Player {
    pub fn new(name: &str, mark: Mark) -> Self {
        Self {
            name: name.to_string(),
            mark,
            score: 0,
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Credits a decisive win. Scores only ever grow; a brand-new match
    /// replaces the player instead of rewinding the counter.
    pub fn award_point(&mut self) {
        self.score += 1;
    }

    /// Returns an owned snapshot for the presentation layer.
    pub fn info(&self) -> PlayerInfo {
        PlayerInfo {
            name: self.name.clone(),
            mark: self.mark,
            score: self.score,
        }
    }
}

/// Snapshot of a player as exposed by the query methods. Detached from the
/// live entity: later plays do not update it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfo {
    pub name: String,
    pub mark: Mark,
    pub score: u32,
}
