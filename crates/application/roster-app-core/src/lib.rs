pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod kernel;
pub mod select;

pub use app_core::*;
pub use domain::{CatalogState, FetchStatus};
pub use kernel::CatalogKernel;
pub use select::{
    all_characters, character_rows, favorite_characters, next_page, CharacterRowVm,
};
