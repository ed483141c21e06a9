use crate::{Character, CharacterId, CharacterStatus};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of the remote character endpoint:
/// `{ "info": { ... }, "results": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<CharacterExternal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    pub count: u64,
    pub pages: u32,
    // `null` on the last/first page respectively.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

impl CharacterPage {
    pub fn is_last(&self) -> bool {
        self.info.next.is_none()
    }
}

/// A character record as the API serves it. Carries no favorite flag; that
/// field exists only on the local [`Character`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterExternal {
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
}

impl From<CharacterExternal> for Character {
    fn from(c: CharacterExternal) -> Character {
        Character {
            id: c.id,
            name: c.name,
            status: c.status,
            species: c.species,
            kind: c.kind,
            gender: c.gender,
            image: c.image,
            url: c.url,
            created: c.created,
            is_favorite: false,
        }
    }
}

pub fn parse_page(data: &[u8]) -> Result<CharacterPage> {
    // Some upstream mirrors prepend a UTF-8 BOM or stray whitespace, which
    // trips `serde_json::from_slice`. Skip both before parsing.
    let mut start = 0usize;
    if data.len() >= 3 && data[0] == 0xEF && data[1] == 0xBB && data[2] == 0xBF {
        start = 3;
    }
    while start < data.len() && data[start].is_ascii_whitespace() {
        start += 1;
    }
    let page: CharacterPage = serde_json::from_slice(&data[start..])
        .map_err(|e| anyhow::anyhow!(format!("failed to parse character page JSON: {}", e)))?;
    Ok(page)
}
