use crate::domain::{CatalogState, FetchStatus};
use roster_core::CharacterId;

use super::events::CatalogEvent;

pub fn reduce(mut state: CatalogState, ev: CatalogEvent) -> CatalogState {
    match ev {
        CatalogEvent::FetchStarted => {
            state.status = FetchStatus::Loading;
        }

        CatalogEvent::PageLoaded { page, characters } => {
            state.status = FetchStatus::Idle;
            state.characters.extend(characters);
            // Advance to one past the page that actually loaded; overlapping
            // completions for the same page must not double-advance.
            state.page = page + 1;
        }

        CatalogEvent::FetchFailed => {
            state.status = FetchStatus::Failed;
        }

        CatalogEvent::FavoriteMarked(id) => set_favorite(&mut state, id, true),
        CatalogEvent::FavoriteUnmarked(id) => set_favorite(&mut state, id, false),
    }
    state
}

fn set_favorite(state: &mut CatalogState, id: CharacterId, favorite: bool) {
    state.characters = state
        .characters
        .iter()
        .map(|c| {
            if c.id == id {
                let mut c = c.clone();
                c.is_favorite = favorite;
                c
            } else {
                c.clone()
            }
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{Character, CharacterStatus};

    fn character(id: i64, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            status: CharacterStatus::Alive,
            species: "Human".to_string(),
            kind: String::new(),
            gender: String::new(),
            image: String::new(),
            url: String::new(),
            created: None,
            is_favorite: false,
        }
    }

    #[test]
    fn page_load_appends_resets_status_and_advances_cursor() {
        let state = CatalogState::default();
        let state = reduce(state, CatalogEvent::FetchStarted);
        assert_eq!(state.status, FetchStatus::Loading);

        let state = reduce(
            state,
            CatalogEvent::PageLoaded {
                page: 1,
                characters: vec![character(1, "Rick Sanchez")],
            },
        );
        assert_eq!(state.status, FetchStatus::Idle);
        assert_eq!(state.characters.len(), 1);
        assert!(!state.characters[0].is_favorite);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn failed_fetch_flags_status_only() {
        let mut seeded = CatalogState::default();
        seeded.characters = vec![character(1, "Rick Sanchez")];
        seeded.page = 2;

        let state = reduce(seeded.clone(), CatalogEvent::FetchStarted);
        let state = reduce(state, CatalogEvent::FetchFailed);
        assert_eq!(state.status, FetchStatus::Failed);
        assert_eq!(state.characters, seeded.characters);
        assert_eq!(state.page, seeded.page);
    }

    #[test]
    fn same_page_loaded_twice_appends_duplicates_but_advances_once() {
        let batch = vec![character(1, "Rick Sanchez")];
        let state = CatalogState::default();
        let state = reduce(
            state,
            CatalogEvent::PageLoaded {
                page: 1,
                characters: batch.clone(),
            },
        );
        let state = reduce(
            state,
            CatalogEvent::PageLoaded {
                page: 1,
                characters: batch,
            },
        );
        assert_eq!(state.characters.len(), 2);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn mark_then_unmark_restores_prior_state() {
        let mut state = CatalogState::default();
        state.characters = vec![character(1, "Rick Sanchez"), character(2, "Morty Smith")];
        let before = state.clone();

        let state = reduce(state, CatalogEvent::FavoriteMarked(2));
        assert!(state.characters[1].is_favorite);
        assert!(!state.characters[0].is_favorite);

        let state = reduce(state, CatalogEvent::FavoriteUnmarked(2));
        assert_eq!(state, before);
    }

    #[test]
    fn toggling_an_absent_id_is_a_no_op() {
        let mut state = CatalogState::default();
        state.characters = vec![character(1, "Rick Sanchez")];
        let before = state.clone();

        let state = reduce(state, CatalogEvent::FavoriteMarked(999));
        assert_eq!(state, before);
    }
}
