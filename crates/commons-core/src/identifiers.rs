//! Post identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::BoardId;
use crate::time::TimeStamp;

/// Identifier of a post: the owning board's slug joined with the creation
/// timestamp in milliseconds, e.g. `batch-1718000000000`.
///
/// The id is an opaque string once composed; lookups never assume the format
/// beyond uniqueness, which keeps externally seeded content valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Compose the id for a post created on `board` at `at`.
    #[must_use]
    pub fn compose(board: BoardId, at: TimeStamp) -> Self {
        Self(format!("{}-{}", board.slug(), at.as_millis()))
    }

    /// View as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Owning board, when the id follows the composed format.
    #[must_use]
    pub fn board(&self) -> Option<BoardId> {
        let (slug, _) = self.0.rsplit_once('-')?;
        slug.parse().ok()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PostId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for PostId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
