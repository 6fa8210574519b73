use std::fmt;

use serde::Deserialize;

/// Which roster set an entry occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Team A
    Radiant,
    /// Team B
    Dire,
    Ban,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Radiant, Role::Dire, Role::Ban];

    pub fn title(self) -> &'static str {
        match self {
            Role::Radiant => "Radiant",
            Role::Dire => "Dire",
            Role::Ban => "Bans",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Radiant => write!(f, "radiant"),
            Role::Dire => write!(f, "dire"),
            Role::Ban => write!(f, "ban"),
        }
    }
}

/// The team the user is drafting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Radiant,
    Dire,
}

impl Side {
    pub fn own_role(self) -> Role {
        match self {
            Side::Radiant => Role::Radiant,
            Side::Dire => Role::Dire,
        }
    }

    /// Role whose members are the opponents for matchup statistics
    pub fn enemy_role(self) -> Role {
        match self {
            Side::Radiant => Role::Dire,
            Side::Dire => Role::Radiant,
        }
    }

    pub fn flipped(self) -> Side {
        match self {
            Side::Radiant => Side::Dire,
            Side::Dire => Side::Radiant,
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "radiant" | "a" => Ok(Side::Radiant),
            "dire" | "b" => Ok(Side::Dire),
            other => Err(format!("unknown side '{}', expected radiant or dire", other)),
        }
    }
}
