//! Top-level menu.

use std::str::FromStr;

use roster_core::RosterError;

/// A top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddRecord,
    DisplayAll,
    Search,
    Sort,
    Statistics,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.parse::<u32>() {
            Ok(1) => Ok(MenuChoice::AddRecord),
            Ok(2) => Ok(MenuChoice::DisplayAll),
            Ok(3) => Ok(MenuChoice::Search),
            Ok(4) => Ok(MenuChoice::Sort),
            Ok(5) => Ok(MenuChoice::Statistics),
            Ok(0) => Ok(MenuChoice::Exit),
            _ => Err(RosterError::InvalidChoice(input.to_string())),
        }
    }
}

pub const MENU: &str = "\n=== Student Records ===
1. Add record
2. Display all records
3. Search records
4. Sort records
5. Score statistics
0. Exit
";

pub const CHOICE_PROMPT: &str = "Enter choice: ";

pub const INVALID_CHOICE: &str = "Invalid choice.";
