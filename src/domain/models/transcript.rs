use serde::{Deserialize, Serialize};

use super::Turn;

/// The ordered conversation of one chat session.
///
/// Insertion order is chronological order is display order. A transcript is a
/// value: [`Transcript::append`] returns a new transcript and leaves `self`
/// untouched, so there is no way to reorder or edit a turn once recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, turn: Turn) -> Self {
        let mut turns = Vec::with_capacity(self.turns.len() + 1);
        turns.extend(self.turns.iter().cloned());
        turns.push(turn);
        Self { turns }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Splits into the newest turn and everything before it.
    pub fn split_last(&self) -> Option<(&Turn, &[Turn])> {
        self.turns.split_last()
    }

    pub fn ends_with_user(&self) -> bool {
        self.last().is_some_and(Turn::is_user)
    }
}

impl From<Vec<Turn>> for Transcript {
    fn from(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}

impl FromIterator<Turn> for Transcript {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self {
            turns: iter.into_iter().collect(),
        }
    }
}
