//! Colors used across the UI

use ratatui::style::Color;

use crate::catalog::Attribute;

pub fn attribute_color(attr: Attribute) -> Color {
    match attr {
        Attribute::Strength => Color::Red,
        Attribute::Agility => Color::Green,
        Attribute::Intelligence => Color::Cyan,
        Attribute::Universal => Color::Yellow,
    }
}

pub mod border {
    use ratatui::style::Color;

    pub const FOCUSED: Color = Color::Cyan;
    pub const UNFOCUSED: Color = Color::DarkGray;
}

pub mod listing {
    use ratatui::style::{Color, Modifier};

    pub const SELECTED_BG: Color = Color::Rgb(50, 55, 70);
    pub const SELECTED_MODIFIER: Modifier = Modifier::BOLD;
    pub const EMPTY: Color = Color::DarkGray;
    pub const PARTIAL_MARKER: Color = Color::DarkGray;
}

pub mod matchup {
    use ratatui::style::Color;

    pub const FAVORABLE: Color = Color::Green;
    pub const UNFAVORABLE: Color = Color::Red;
    pub const EVEN: Color = Color::Gray;
}

pub mod roster {
    use ratatui::style::Color;

    pub const RADIANT: Color = Color::Green;
    pub const DIRE: Color = Color::Red;
    pub const BAN: Color = Color::DarkGray;
    pub const EMPTY_SLOT: Color = Color::DarkGray;
}

pub mod filter {
    use ratatui::style::Color;

    pub const INACTIVE: Color = Color::DarkGray;
}

pub mod help {
    use ratatui::style::Color;

    pub const KEY: Color = Color::Yellow;
    pub const DESCRIPTION: Color = Color::White;
    pub const LINE: Color = Color::DarkGray;
}

pub mod notification {
    use ratatui::style::Color;

    pub const INFO: Color = Color::Cyan;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
}
