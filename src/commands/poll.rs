use crate::commands::Menu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollCommand {
    Create,
    AddOptions,
    Vote,
    ViewResults,
    Export,
    Close,
    List,
    ExportJson,
    Back,
}

impl Menu for PollCommand {
    const TITLE: &'static str = "Poll Management System";
    const ENTRIES: &'static [Self] = &[
        PollCommand::Create,
        PollCommand::AddOptions,
        PollCommand::Vote,
        PollCommand::ViewResults,
        PollCommand::Export,
        PollCommand::Close,
        PollCommand::List,
        PollCommand::ExportJson,
        PollCommand::Back,
    ];

    fn label(self) -> &'static str {
        match self {
            PollCommand::Create => "Create New Poll",
            PollCommand::AddOptions => "Add Options to Current Poll",
            PollCommand::Vote => "Conduct Voting",
            PollCommand::ViewResults => "View Current Poll Results",
            PollCommand::Export => "Export Results",
            PollCommand::ExportJson => "Export Results as JSON",
            PollCommand::Close => "Close Current Poll",
            PollCommand::List => "List Polls",
            PollCommand::Back => "Return to Main Menu",
        }
    }
}
