pub mod poll;

use std::fmt::Write;

/// A numbered console menu. Entries are listed and selected 1-based.
pub trait Menu: Copy + 'static {
    const TITLE: &'static str;
    const ENTRIES: &'static [Self];

    fn label(self) -> &'static str;

    fn render() -> String {
        let mut out = format!("\n{}\n", Self::TITLE);
        for (i, entry) in Self::ENTRIES.iter().enumerate() {
            // Writing into a String cannot fail
            let _ = writeln!(out, "{}. {}", i + 1, entry.label());
        }
        out.push_str("Enter choice: ");
        out
    }

    fn parse(input: &str) -> MenuInput<Self> {
        match input.trim().parse::<usize>() {
            Ok(n) if (1..=Self::ENTRIES.len()).contains(&n) => MenuInput::Selected(Self::ENTRIES[n - 1]),
            Ok(_) => MenuInput::Unknown,
            Err(_) => MenuInput::NotANumber,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput<T> {
    Selected(T),
    Unknown,
    NotANumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    ManagePolls,
    Exit,
}

impl Menu for MainCommand {
    const TITLE: &'static str = "Main Menu";
    const ENTRIES: &'static [Self] = &[MainCommand::ManagePolls, MainCommand::Exit];

    fn label(self) -> &'static str {
        match self {
            MainCommand::ManagePolls => "Manage Polls",
            MainCommand::Exit => "Exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_lists_entries_in_order() {
        let rendered = MainCommand::render();
        assert_eq!(rendered, "\nMain Menu\n1. Manage Polls\n2. Exit\nEnter choice: ");
    }

    #[test]
    fn parses_one_based_choices() {
        assert_eq!(MainCommand::parse("1"), MenuInput::Selected(MainCommand::ManagePolls));
        assert_eq!(MainCommand::parse(" 2 "), MenuInput::Selected(MainCommand::Exit));
        assert_eq!(MainCommand::parse("0"), MenuInput::Unknown);
        assert_eq!(MainCommand::parse("3"), MenuInput::Unknown);
        assert_eq!(MainCommand::parse("exit"), MenuInput::NotANumber);
    }
}
