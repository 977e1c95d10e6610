//! Viewer identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared gender attribute of the viewer.
///
/// Used only by the board access policy; registration may leave it
/// unspecified, which simply fails both gendered gates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("male"),
            Self::Female => f.write_str("female"),
            Self::Unspecified => f.write_str("unspecified"),
        }
    }
}

/// Identity supplied by the login/registration screens.
///
/// Set once when the session authenticates and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerProfile {
    /// Display name shown in headers and own-post affordances.
    pub display_name: String,
    /// Gender attribute consumed by the board access policy.
    pub gender: Gender,
    /// Avatar reference (emoji or asset key); display-only.
    pub avatar: String,
}

impl ViewerProfile {
    /// Convenience constructor.
    pub fn new(display_name: impl Into<String>, gender: Gender, avatar: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            gender,
            avatar: avatar.into(),
        }
    }
}
