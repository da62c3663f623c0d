mod prompt;
mod vote;

use std::io::{BufRead, Write};

use log::{info, warn};

use crate::commands::poll::PollCommand;
use crate::commands::{MainCommand, Menu, MenuInput};
use crate::config::Config;
use crate::error::{PollError, Result};
use crate::registry::PollRegistry;

/// Menu-driven console session over any line reader and writer.
pub struct Session<R, W> {
    pub(crate) input: R,
    pub(crate) output: W,
    pub(crate) registry: PollRegistry,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            registry: PollRegistry::new(),
            config,
        }
    }

    pub fn registry(&self) -> &PollRegistry {
        &self.registry
    }

    /// Runs the main menu until the user exits or input ends.
    ///
    /// Only console I/O failures are returned; poll errors are printed and the
    /// menu is shown again.
    pub fn run(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(err) if prompt::is_end_of_input(&err) => {
                info!("Input closed, leaving poll manager");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            let input = self.prompt(&MainCommand::render())?;
            if input.trim().is_empty() {
                continue;
            }

            match MainCommand::parse(&input) {
                MenuInput::Selected(MainCommand::ManagePolls) => self.manage_polls()?,
                MenuInput::Selected(MainCommand::Exit) => {
                    writeln!(self.output, "Exiting program...")?;
                    return Ok(());
                }
                MenuInput::Unknown => writeln!(self.output, "Invalid choice!")?,
                MenuInput::NotANumber => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    fn manage_polls(&mut self) -> Result<()> {
        loop {
            let input = self.prompt(&PollCommand::render())?;
            if input.trim().is_empty() {
                continue;
            }

            let command = match PollCommand::parse(&input) {
                MenuInput::Selected(PollCommand::Back) => return Ok(()),
                MenuInput::Selected(command) => command,
                MenuInput::Unknown => {
                    writeln!(self.output, "Invalid choice!")?;
                    continue;
                }
                MenuInput::NotANumber => {
                    writeln!(self.output, "Please enter a valid number.")?;
                    continue;
                }
            };

            if let Err(err) = self.dispatch(command) {
                if err.is_fatal() {
                    return Err(err);
                }
                warn!("{} failed: {}", command.label(), err);
                writeln!(self.output, "Error: {}", err)?;
            }
        }
    }

    fn dispatch(&mut self, command: PollCommand) -> Result<()> {
        match command {
            PollCommand::Create => self.create_poll(),
            PollCommand::AddOptions => self.add_options(),
            PollCommand::Vote => vote::conduct_voting(self),
            PollCommand::ViewResults => {
                let results = self.registry.display_results()?;
                writeln!(self.output, "\n{}", results)?;
                Ok(())
            }
            PollCommand::Export => self.export_results(false),
            PollCommand::ExportJson => self.export_results(true),
            PollCommand::Close => {
                self.registry.close_current()?;
                writeln!(self.output, "Current poll closed!")?;
                Ok(())
            }
            PollCommand::List => self.list_polls(),
            PollCommand::Back => Ok(()),
        }
    }

    fn create_poll(&mut self) -> Result<()> {
        writeln!(self.output, "\nCreate New Poll")?;
        let title = self.prompt("Enter poll title: ")?;
        if title.trim().is_empty() {
            return Err(PollError::Validation("Poll title cannot be empty".to_string()));
        }

        let description = self.prompt("Enter poll description: ")?;
        let anonymous = self.ask_yes_no("Make poll anonymous?", self.config.default_anonymous)?;

        self.registry.create_poll(title.trim(), description, anonymous)?;
        writeln!(self.output, "Poll created successfully!")?;
        Ok(())
    }

    fn add_options(&mut self) -> Result<()> {
        let title = self.registry.open_poll()?.title().to_string();
        writeln!(self.output, "\nAdd Options to Poll: {}", title)?;
        writeln!(self.output, "(Enter an empty line to finish)")?;

        loop {
            let option = self.prompt("Enter option text: ")?;
            if option.is_empty() {
                return Ok(());
            }
            self.registry.add_option(option)?;
        }
    }

    fn export_results(&mut self, as_json: bool) -> Result<()> {
        self.registry.current_poll()?;

        let filename = self.prompt("Enter filename to export: ")?;
        let filename = filename.trim();
        if filename.is_empty() {
            return Ok(());
        }

        let path = self.config.export_path(filename);
        if as_json {
            self.registry.export_json(&path)?;
        } else {
            self.registry.export_to(&path)?;
        }
        writeln!(self.output, "Results exported to {}", path.display())?;
        Ok(())
    }

    fn list_polls(&mut self) -> Result<()> {
        if self.registry.is_empty() {
            return Err(PollError::NoPoll);
        }

        writeln!(self.output, "\nPolls ({})", self.registry.len())?;
        let last = self.registry.len() - 1;
        for (i, poll) in self.registry.polls().iter().enumerate() {
            let marker = if i == last { "*" } else { " " };
            let status = if poll.is_voting_open() { "Open" } else { "Closed" };
            writeln!(
                self.output,
                "{} {}. {} [{}] - {} options, {} votes (id {}, created {})",
                marker,
                i + 1,
                poll.title(),
                status,
                poll.options().len(),
                poll.total_votes(),
                poll.id(),
                poll.created_at().format("%Y-%m-%d %H:%M UTC")
            )?;
        }
        Ok(())
    }
}
