//! Board enumeration and per-board policy.
//!
//! Boards are a closed set: they are created once at startup and never
//! destroyed, so they are modeled as an enum rather than as data. Each board
//! carries its display categories and an access policy; two boards are
//! gender-gated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::profile::Gender;

/// A community board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardId {
    /// Class-year discussions
    Batch,
    /// Academic topics by major
    Major,
    /// Style and trends
    Fashion,
    /// Faith and values
    Religion,
    /// Beats and lyrics
    Music,
    /// Films and series
    Movie,
    /// Games and fitness
    Sports,
    /// Men-only lounge
    Mens,
    /// Women-only lounge
    Womens,
    /// Official updates, posted by staff
    Announcements,
}

/// Who may open a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAccess {
    /// Open to every authenticated viewer.
    Open,
    /// Restricted to viewers with the given gender attribute.
    GenderOnly(Gender),
}

impl BoardId {
    /// Every board, in the order the home screen lists them.
    pub const ALL: [BoardId; 10] = [
        BoardId::Batch,
        BoardId::Major,
        BoardId::Fashion,
        BoardId::Religion,
        BoardId::Music,
        BoardId::Movie,
        BoardId::Sports,
        BoardId::Mens,
        BoardId::Womens,
        BoardId::Announcements,
    ];

    /// URL-ish identifier, also the prefix of post ids.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Batch => "batch",
            Self::Major => "major",
            Self::Fashion => "fashion",
            Self::Religion => "religion",
            Self::Music => "music",
            Self::Movie => "movie",
            Self::Sports => "sports",
            Self::Mens => "mens",
            Self::Womens => "womens",
            Self::Announcements => "announcements",
        }
    }

    /// Display title as the home screen renders it.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Batch => "BATCH",
            Self::Major => "MAJOR",
            Self::Fashion => "FASHION",
            Self::Religion => "RELIGION",
            Self::Music => "MUSIC",
            Self::Movie => "MOVIE",
            Self::Sports => "SPORTS",
            Self::Mens => "MENS",
            Self::Womens => "WOMENS",
            Self::Announcements => "ANNOUNCEMENTS",
        }
    }

    /// The five category labels used for display filtering on this board.
    #[must_use]
    pub fn categories(&self) -> [&'static str; 5] {
        match self {
            Self::Batch => ["ACADEMIC", "SOCIAL", "STUDY GROUP", "ASSIGNMENTS", "EXAMS"],
            Self::Major => ["COMPUTER SCIENCE", "BUSINESS", "ENGINEERING", "ARTS", "SCIENCE"],
            Self::Fashion => ["STREETWEAR", "FORMAL", "ACCESSORIES", "BRANDS", "TRENDS"],
            Self::Religion => ["ISLAM", "CHRISTIANITY", "BUDDHISM", "HINDUISM", "INTERFAITH"],
            Self::Music => ["POP", "ROCK", "JAZZ", "CLASSICAL", "LOCAL"],
            Self::Movie => ["ACTION", "COMEDY", "DRAMA", "HORROR", "DOCUMENTARY"],
            Self::Sports => ["FOOTBALL", "BASKETBALL", "TENNIS", "SWIMMING", "FITNESS"],
            Self::Mens => ["LIFESTYLE", "SPORTS", "CAREER", "RELATIONSHIPS", "HEALTH"],
            Self::Womens => ["LIFESTYLE", "BEAUTY", "CAREER", "RELATIONSHIPS", "HEALTH"],
            Self::Announcements => ["ACADEMIC", "EVENTS", "FACILITIES", "GENERAL", "URGENT"],
        }
    }

    /// Access policy for this board.
    #[must_use]
    pub fn access(&self) -> BoardAccess {
        match self {
            Self::Mens => BoardAccess::GenderOnly(Gender::Male),
            Self::Womens => BoardAccess::GenderOnly(Gender::Female),
            _ => BoardAccess::Open,
        }
    }

    /// Whether a viewer with the given gender attribute may open this board.
    #[must_use]
    pub fn is_open_to(&self, viewer: Gender) -> bool {
        match self.access() {
            BoardAccess::Open => true,
            BoardAccess::GenderOnly(required) => viewer == required,
        }
    }

    /// Author display string for posts created on this board.
    ///
    /// Announcements are staff-authored; every other board is anonymous.
    #[must_use]
    pub fn author_sentinel(&self) -> &'static str {
        match self {
            Self::Announcements => "Admin",
            _ => "Anonymous",
        }
    }

    /// Avatar glyph paired with [`author_sentinel`](Self::author_sentinel).
    #[must_use]
    pub fn avatar_sentinel(&self) -> &'static str {
        match self {
            Self::Announcements => "\u{1F4E2}",
            _ => "\u{1F31F}",
        }
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a string does not name a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown board '{0}'")]
pub struct UnknownBoard(pub String);

impl FromStr for BoardId {
    type Err = UnknownBoard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.slug() == s)
            .ok_or_else(|| UnknownBoard(s.to_string()))
    }
}
