use roster_core::{Character, CharacterId, CharacterStatus};

use crate::domain::CatalogState;

/// The accumulated catalog, unchanged.
pub fn all_characters(state: &CatalogState) -> &[Character] {
    &state.characters
}

/// The favorite subsequence, preserving catalog order.
pub fn favorite_characters(state: &CatalogState) -> Vec<Character> {
    state
        .characters
        .iter()
        .filter(|c| c.is_favorite)
        .cloned()
        .collect()
}

/// The next page cursor.
pub fn next_page(state: &CatalogState) -> u32 {
    state.page
}

// --- CLI row VM ---

#[derive(Debug, Clone)]
pub struct CharacterRowVm {
    pub id: CharacterId,
    pub name: String,
    pub species: String,
    pub status_label: &'static str,
    pub favorite_marker: &'static str,
}

impl From<&Character> for CharacterRowVm {
    fn from(c: &Character) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            species: c.species.clone(),
            status_label: match c.status {
                CharacterStatus::Alive => "Alive",
                CharacterStatus::Dead => "Dead",
                CharacterStatus::Unknown => "Unknown",
            },
            favorite_marker: if c.is_favorite { "*" } else { " " },
        }
    }
}

pub fn character_rows(state: &CatalogState) -> Vec<CharacterRowVm> {
    state.characters.iter().map(CharacterRowVm::from).collect()
}
