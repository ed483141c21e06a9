use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod formats;

pub type CharacterId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CharacterStatus {
    Alive,
    Dead,
    // The API reports this variant in lowercase, unlike the other two.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Default for CharacterStatus {
    fn default() -> Self {
        CharacterStatus::Unknown
    }
}

/// A catalog entry: the remote record plus the locally-owned favorite flag.
///
/// `id` is the sole equality key for lookups and updates; every other field
/// is descriptive data owned by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub status: CharacterStatus,
    #[serde(default)]
    pub species: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_favorite: bool,
}
