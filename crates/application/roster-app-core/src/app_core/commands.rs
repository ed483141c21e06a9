use roster_core::CharacterId;

#[derive(Debug, Clone)]
pub enum CatalogCommand {
    // Remote retrieval
    FetchPage(u32),

    // Favorite toggles
    MarkFavorite(CharacterId),
    UnmarkFavorite(CharacterId),
}
