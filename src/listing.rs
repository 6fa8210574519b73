//! Listing engine
//!
//! Keeps one [`Listing`] per catalog entry and, on every state change,
//! recomputes visibility, ordering and matchup totals. The engine knows
//! nothing about rendering; the front end draws whatever
//! [`ListingEngine::visible`] yields, in order.

mod filter;
mod listing_engine;

pub use filter::FilterState;
pub use listing_engine::{Listing, ListingEngine, NEUTRAL_SCORE};
