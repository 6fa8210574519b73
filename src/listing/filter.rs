use crate::catalog::Attribute;

/// "Only show this attribute" toggles
///
/// With no toggle active every attribute passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    active: [bool; Attribute::ALL.len()],
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one toggle, returning its new state
    pub fn toggle(&mut self, attr: Attribute) -> bool {
        let slot = &mut self.active[attr.index()];
        *slot = !*slot;
        *slot
    }

    pub fn set(&mut self, attr: Attribute, active: bool) {
        self.active[attr.index()] = active;
    }

    pub fn clear(&mut self) {
        self.active = Default::default();
    }

    pub fn is_active(&self, attr: Attribute) -> bool {
        self.active[attr.index()]
    }

    pub fn any_active(&self) -> bool {
        self.active.iter().any(|a| *a)
    }

    pub fn passes(&self, attr: Attribute) -> bool {
        !self.any_active() || self.is_active(attr)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
