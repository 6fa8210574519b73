use crate::roster::{Role, RosterSets};

/// Position of the highlight in the roster panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterCursor {
    pub role: Role,
    pub index: usize,
}

impl Default for RosterCursor {
    fn default() -> Self {
        Self {
            role: Role::Radiant,
            index: 0,
        }
    }
}

impl RosterCursor {
    pub fn move_left(&mut self, roster: &RosterSets) {
        self.role = match self.role {
            Role::Radiant => Role::Ban,
            Role::Dire => Role::Radiant,
            Role::Ban => Role::Dire,
        };
        self.clamp(roster);
    }

    pub fn move_right(&mut self, roster: &RosterSets) {
        self.role = match self.role {
            Role::Radiant => Role::Dire,
            Role::Dire => Role::Ban,
            Role::Ban => Role::Radiant,
        };
        self.clamp(roster);
    }

    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_down(&mut self, roster: &RosterSets) {
        let len = roster.members(self.role).len();
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    /// Keep the index on an occupied slot, or 0 for an empty column
    pub fn clamp(&mut self, roster: &RosterSets) {
        let len = roster.members(self.role).len();
        self.index = self.index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "roster_cursor_tests.rs"]
mod roster_cursor_tests;
