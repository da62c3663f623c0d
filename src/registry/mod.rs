use std::path::Path;

use log::{info, warn};

use crate::error::{PollError, Result};
use crate::export;
use crate::models::Poll;
use crate::voting::PollResults;

/// In-memory collection of every poll created during a run.
///
/// All per-poll operations target the most recently created poll.
#[derive(Debug, Default)]
pub struct PollRegistry {
    polls: Vec<Poll>,
}

impl PollRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_poll(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        anonymous: bool,
    ) -> Result<&Poll> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(PollError::Validation("Poll title cannot be empty".to_string()));
        }

        let poll = Poll::new(title, description.into(), anonymous);
        info!("Created poll {} ('{}')", poll.id(), poll.title());
        self.polls.push(poll);
        self.current_poll()
    }

    pub fn current_poll(&self) -> Result<&Poll> {
        self.polls.last().ok_or(PollError::NoPoll)
    }

    pub fn current_poll_mut(&mut self) -> Result<&mut Poll> {
        self.polls.last_mut().ok_or(PollError::NoPoll)
    }

    /// Current poll, provided it still accepts options and votes.
    pub fn open_poll(&self) -> Result<&Poll> {
        let poll = self.current_poll()?;
        if !poll.is_voting_open() {
            return Err(PollError::ClosedPoll);
        }
        Ok(poll)
    }

    pub fn add_option(&mut self, text: impl Into<String>) -> Result<()> {
        self.current_poll_mut()?.add_option(text)
    }

    /// Zero-based vote on the current poll.
    ///
    /// Closed and option-less polls are errors here; an out-of-range index is
    /// the poll's own `false` outcome.
    pub fn vote(&mut self, option_index: usize) -> Result<bool> {
        let poll = self.current_poll_mut()?;
        if !poll.is_voting_open() {
            return Err(PollError::ClosedPoll);
        }
        if poll.options().is_empty() {
            return Err(PollError::EmptyPoll);
        }

        let recorded = poll.vote(option_index);
        if !recorded {
            warn!("Rejected vote for option index {} on poll {}", option_index, poll.id());
        }
        Ok(recorded)
    }

    pub fn close_current(&mut self) -> Result<()> {
        let poll = self.current_poll_mut()?;
        poll.close();
        info!("Closed poll {} ('{}')", poll.id(), poll.title());
        Ok(())
    }

    pub fn display_results(&self) -> Result<PollResults> {
        Ok(self.current_poll()?.display_results())
    }

    pub fn export_summary(&self) -> Result<String> {
        Ok(self.current_poll()?.export_summary())
    }

    /// Writes the current poll's CSV summary to `path`.
    pub fn export_to(&self, path: &Path) -> Result<()> {
        export::write_csv(&self.display_results()?, path)
    }

    pub fn export_json(&self, path: &Path) -> Result<()> {
        export::write_json(&self.display_results()?, path)
    }

    pub fn polls(&self) -> &[Poll] {
        &self.polls
    }

    pub fn len(&self) -> usize {
        self.polls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polls.is_empty()
    }
}
