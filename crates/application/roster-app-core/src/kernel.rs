use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use roster_client::CharacterSource;
use roster_core::Character;

use crate::app_core::{CatalogCommand, CatalogEvent, CatalogStore};

/// The dispatchable surface of the catalog: commands go in, the store holds
/// the state, async fetch completions come back through `tick`.
pub struct CatalogKernel<S> {
    pub store: CatalogStore,
    source: Arc<S>,

    tx: mpsc::Sender<CatalogEvent>,
    rx: mpsc::Receiver<CatalogEvent>,
}

impl<S> CatalogKernel<S>
where
    S: CharacterSource + 'static,
{
    pub fn new(store: CatalogStore, source: S) -> Self {
        let (tx, rx) = mpsc::channel(100);
        Self {
            store,
            source: Arc::new(source),
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, cmd: CatalogCommand) {
        match cmd {
            CatalogCommand::FetchPage(page) => {
                // Loading must be observable before the request resolves.
                self.store.apply(CatalogEvent::FetchStarted);

                let tx = self.tx.clone();
                let source = self.source.clone();
                let spawn_res = std::thread::Builder::new()
                    .name("roster-fetch-page".into())
                    .spawn(move || {
                        let rt = match crate::async_runtime::runtime() {
                            Ok(rt) => rt,
                            Err(e) => {
                                warn!(page, error = %e, "failed to start async runtime");
                                let _ = tx.blocking_send(CatalogEvent::FetchFailed);
                                return;
                            }
                        };

                        match rt.block_on(source.fetch_page(page)) {
                            Ok(batch) => {
                                let characters: Vec<Character> =
                                    batch.results.into_iter().map(Character::from).collect();
                                debug!(page, count = characters.len(), "page loaded");
                                let _ = tx.blocking_send(CatalogEvent::PageLoaded {
                                    page,
                                    characters,
                                });
                            }
                            Err(e) => {
                                // The state keeps only the failure flag; the
                                // message survives here.
                                warn!(page, error = %e, "page fetch failed");
                                let _ = tx.blocking_send(CatalogEvent::FetchFailed);
                            }
                        }
                    });

                if let Err(e) = spawn_res {
                    warn!(page, error = %e, "failed to start fetch worker thread");
                    self.store.apply(CatalogEvent::FetchFailed);
                }
            }

            CatalogCommand::MarkFavorite(id) => {
                self.store.apply(CatalogEvent::FavoriteMarked(id));
            }

            CatalogCommand::UnmarkFavorite(id) => {
                self.store.apply(CatalogEvent::FavoriteUnmarked(id));
            }
        }
    }

    /// Call this from the host loop/tick to fold in async fetch completions.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.store.apply(ev);
        }
    }
}
