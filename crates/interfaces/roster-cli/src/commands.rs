use anyhow::Context;
use roster_app_core::{
    all_characters, character_rows, favorite_characters, next_page, CatalogCommand, CatalogKernel,
    CatalogStore, FetchStatus,
};
use roster_client::{default_http_client, default_source, HttpCharacterSource};
use roster_core::CharacterId;
use std::time::{Duration, Instant};

const SETTLE_TIMEOUT: Duration = Duration::from_secs(60);

fn build_kernel(api_url: &str) -> anyhow::Result<CatalogKernel<HttpCharacterSource>> {
    let client = default_http_client().context("Failed to build HTTP client")?;
    let source = default_source(client, api_url)?;
    Ok(CatalogKernel::new(CatalogStore::default(), source))
}

/// Pump the kernel until the in-flight fetch resolves, the way a UI frame
/// loop would.
fn settle(kernel: &mut CatalogKernel<HttpCharacterSource>) -> anyhow::Result<()> {
    let deadline = Instant::now() + SETTLE_TIMEOUT;
    loop {
        kernel.tick();
        if kernel.store.state().status != FetchStatus::Loading {
            return Ok(());
        }
        if Instant::now() >= deadline {
            anyhow::bail!("fetch did not settle within {SETTLE_TIMEOUT:?}");
        }
        std::thread::sleep(Duration::from_millis(25));
    }
}

fn fetch_pages(kernel: &mut CatalogKernel<HttpCharacterSource>, pages: u32) -> anyhow::Result<()> {
    for _ in 0..pages {
        let page = next_page(&kernel.store.state());
        kernel.dispatch(CatalogCommand::FetchPage(page));
        settle(kernel)?;
        if kernel.store.state().status == FetchStatus::Failed {
            anyhow::bail!("fetching page {page} failed, see log for details");
        }
    }
    Ok(())
}

pub fn cmd_list(api_url: &str, pages: u32) -> anyhow::Result<()> {
    println!(":: Fetching {pages} page(s) from {api_url}");

    let mut kernel = build_kernel(api_url)?;
    fetch_pages(&mut kernel, pages)?;

    let state = kernel.store.state();
    println!(
        "\n:: Catalog ({} characters, next page {})",
        all_characters(&state).len(),
        next_page(&state)
    );
    for row in character_rows(&state) {
        println!(
            "   {} #{:<4} {:<28} {:<16} {}",
            row.favorite_marker, row.id, row.name, row.species, row.status_label
        );
    }

    Ok(())
}

pub fn cmd_favorites(
    api_url: &str,
    pages: u32,
    mark: Vec<CharacterId>,
    unmark: Vec<CharacterId>,
) -> anyhow::Result<()> {
    println!(":: Fetching {pages} page(s) from {api_url}");

    let mut kernel = build_kernel(api_url)?;
    fetch_pages(&mut kernel, pages)?;

    for id in mark {
        kernel.dispatch(CatalogCommand::MarkFavorite(id));
    }
    for id in unmark {
        kernel.dispatch(CatalogCommand::UnmarkFavorite(id));
    }

    let state = kernel.store.state();
    let favorites = favorite_characters(&state);
    println!(
        "\n:: Favorites ({} of {})",
        favorites.len(),
        all_characters(&state).len()
    );
    for c in &favorites {
        println!("   #{:<4} {}", c.id, c.name);
    }

    Ok(())
}
