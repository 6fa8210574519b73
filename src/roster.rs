//! Roster sets: the two teams and the ban list
//!
//! The sets are pairwise disjoint. Capacity is advisory here; the front end
//! checks [`RosterSets::has_room`] before forwarding a pick.

mod role;
mod roster_sets;

pub use role::{Role, Side};
pub use roster_sets::{DEFAULT_BAN_LIMIT, DEFAULT_TEAM_SIZE, RosterSets};
