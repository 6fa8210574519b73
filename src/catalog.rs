//! Hero catalog
//!
//! The catalog is loaded once at startup from a [`CatalogSource`] and never
//! changes for the rest of the session.

mod catalog_store;
mod entry;
mod source;

pub use catalog_store::CatalogStore;
pub use entry::{AttackType, Attribute, Entry, EntryId, STEAM_CDN_URL};
pub use source::{CatalogSource, FileCatalog, parse_catalog_json};
