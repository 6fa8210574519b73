/// Key binding rows shown in the help popup
///
/// A row with an empty key is a section header; a row with both sides empty
/// is a spacer.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "SEARCH"),
    ("type", "Filter heroes by name"),
    ("↑/↓", "Move selection"),
    ("PgUp/PgDn", "Move selection by a page"),
    ("", ""),
    ("", "DRAFT"),
    ("Enter", "Pick for your team"),
    ("Ctrl+E", "Pick for the enemy team"),
    ("Ctrl+B", "Ban"),
    ("Ctrl+W", "Switch side (Radiant / Dire)"),
    ("", ""),
    ("", "ATTRIBUTE FILTERS"),
    ("Alt+S", "Toggle Strength"),
    ("Alt+A", "Toggle Agility"),
    ("Alt+I", "Toggle Intelligence"),
    ("Alt+U", "Toggle Universal"),
    ("Alt+C", "Clear all filters"),
    ("", ""),
    ("", "ROSTER"),
    ("Tab", "Switch focus (Heroes / Roster)"),
    ("←/→", "Move between Radiant, Dire and Bans"),
    ("↑/↓", "Move within a column"),
    ("Del/Backspace", "Remove from roster"),
    ("", ""),
    ("", "GENERAL"),
    ("F1", "Toggle this help"),
    ("Esc/Ctrl+C", "Quit"),
];

pub const HELP_FOOTER: &str = "press F1 or Esc to close";

#[cfg(test)]
#[path = "help_content_tests.rs"]
mod help_content_tests;
