use super::role::Role;
use crate::catalog::EntryId;
use crate::error::DraftError;

pub const DEFAULT_TEAM_SIZE: usize = 5;
/// Size of the game's ban pool
pub const DEFAULT_BAN_LIMIT: usize = 14;

/// Team A, team B and the ban list, in pick order
#[derive(Debug, Clone)]
pub struct RosterSets {
    radiant: Vec<EntryId>,
    dire: Vec<EntryId>,
    bans: Vec<EntryId>,
    team_size: usize,
    ban_limit: usize,
}

impl Default for RosterSets {
    fn default() -> Self {
        Self::new(DEFAULT_TEAM_SIZE, DEFAULT_BAN_LIMIT)
    }
}

impl RosterSets {
    pub fn new(team_size: usize, ban_limit: usize) -> Self {
        Self {
            radiant: Vec::with_capacity(team_size),
            dire: Vec::with_capacity(team_size),
            bans: Vec::with_capacity(ban_limit),
            team_size,
            ban_limit,
        }
    }

    pub fn members(&self, role: Role) -> &[EntryId] {
        match role {
            Role::Radiant => &self.radiant,
            Role::Dire => &self.dire,
            Role::Ban => &self.bans,
        }
    }

    fn members_mut(&mut self, role: Role) -> &mut Vec<EntryId> {
        match role {
            Role::Radiant => &mut self.radiant,
            Role::Dire => &mut self.dire,
            Role::Ban => &mut self.bans,
        }
    }

    pub fn capacity(&self, role: Role) -> usize {
        match role {
            Role::Radiant | Role::Dire => self.team_size,
            Role::Ban => self.ban_limit,
        }
    }

    pub fn has_room(&self, role: Role) -> bool {
        self.members(role).len() < self.capacity(role)
    }

    /// Role currently held by `id`, if any
    pub fn role_of(&self, id: EntryId) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| self.members(*role).contains(&id))
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.role_of(id).is_some()
    }

    /// Place `id` into `role`
    ///
    /// Fails if the entry already occupies any set. Capacity is not checked.
    pub fn add(&mut self, id: EntryId, role: Role) -> Result<(), DraftError> {
        if let Some(existing) = self.role_of(id) {
            return Err(DraftError::AlreadyRostered { id, role: existing });
        }
        self.members_mut(role).push(id);
        Ok(())
    }

    /// Remove `id` from whichever set holds it, returning that set
    pub fn remove(&mut self, id: EntryId) -> Option<Role> {
        let role = self.role_of(id)?;
        self.members_mut(role).retain(|member| *member != id);
        Some(role)
    }

    /// Every rostered id across the three sets
    pub fn all_members(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.radiant
            .iter()
            .chain(self.dire.iter())
            .chain(self.bans.iter())
            .copied()
    }
}

#[cfg(test)]
#[path = "roster_sets_tests.rs"]
mod roster_sets_tests;
