use roster_core::{Character, CharacterId};

#[derive(Debug, Clone)]
pub enum CatalogEvent {
    // Fetch lifecycle
    FetchStarted,
    PageLoaded {
        /// The page that was requested, echoed back with its batch.
        page: u32,
        characters: Vec<Character>,
    },
    FetchFailed,

    // Favorite toggles
    FavoriteMarked(CharacterId),
    FavoriteUnmarked(CharacterId),
}
