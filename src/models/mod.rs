use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{PollError, Result};
use crate::export;
use crate::voting::{self, PollResults};

// Owned by the registry only; not Clone.
#[derive(Debug)]
pub struct Poll {
    id: Uuid,
    title: String,
    description: String,
    is_anonymous: bool,
    voting_open: bool,
    options: Vec<PollOption>,
    created_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOption {
    pub text: String,
    pub votes: u32,
}

impl Poll {
    /// Builds an open poll with no options. Title validation is the registry's job.
    pub fn new(title: String, description: String, is_anonymous: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            is_anonymous,
            voting_open: true,
            options: Vec::new(),
            created_at: Utc::now(),
            closed_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    pub fn is_voting_open(&self) -> bool {
        self.voting_open
    }

    pub fn options(&self) -> &[PollOption] {
        &self.options
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    pub fn total_votes(&self) -> u32 {
        self.options.iter().map(|option| option.votes).sum()
    }

    pub fn add_option(&mut self, text: impl Into<String>) -> Result<()> {
        if !self.voting_open {
            return Err(PollError::ClosedPoll);
        }
        self.options.push(PollOption {
            text: text.into(),
            votes: 0,
        });
        Ok(())
    }

    /// Records one vote for the zero-based `option_index`.
    ///
    /// Returns `false` instead of an error when the poll is closed or the index
    /// is out of range, so an interactive caller can simply ask again.
    pub fn vote(&mut self, option_index: usize) -> bool {
        if !self.voting_open {
            return false;
        }
        match self.options.get_mut(option_index) {
            Some(option) => {
                option.votes += 1;
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        if self.voting_open {
            self.voting_open = false;
            self.closed_at = Some(Utc::now());
        }
    }

    pub fn display_results(&self) -> PollResults {
        voting::plurality::calculate_results(self)
    }

    pub fn export_summary(&self) -> String {
        export::csv_summary(&self.display_results())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch_poll() -> Poll {
        let mut poll = Poll::new("Lunch".to_string(), "Where to eat".to_string(), true);
        poll.add_option("Pizza").unwrap();
        poll.add_option("Salad").unwrap();
        poll
    }

    #[test]
    fn new_poll_is_open_and_empty() {
        let poll = Poll::new("Title".to_string(), "desc".to_string(), false);
        assert!(poll.is_voting_open());
        assert!(poll.options().is_empty());
        assert_eq!(poll.total_votes(), 0);
        assert!(poll.closed_at().is_none());
    }

    #[test]
    fn duplicate_option_text_is_allowed() {
        let mut poll = lunch_poll();
        poll.add_option("Pizza").unwrap();
        assert_eq!(poll.options().len(), 3);
        assert_eq!(poll.options()[2].votes, 0);
    }

    #[test]
    fn total_votes_counts_successful_votes_only() {
        let mut poll = lunch_poll();
        let attempts = [0, 1, 5, 0, 2, 1, usize::MAX];
        let successes = attempts.iter().filter(|&&i| poll.vote(i)).count();
        assert_eq!(successes, 4);
        assert_eq!(poll.total_votes(), 4);
    }

    #[test]
    fn out_of_range_vote_leaves_counts_unchanged() {
        let mut poll = lunch_poll();
        poll.vote(0);
        assert!(!poll.vote(2));
        assert!(!poll.vote(100));
        assert_eq!(poll.options()[0].votes, 1);
        assert_eq!(poll.options()[1].votes, 0);
    }

    #[test]
    fn vote_on_poll_without_options_fails() {
        let mut poll = Poll::new("Title".to_string(), "desc".to_string(), true);
        assert!(!poll.vote(0));
    }

    #[test]
    fn closed_poll_rejects_options_and_votes() {
        let mut poll = lunch_poll();
        poll.close();
        let closed_at = poll.closed_at();
        assert!(closed_at.is_some());

        for _ in 0..3 {
            poll.close();
            assert!(matches!(poll.add_option("Soup"), Err(PollError::ClosedPoll)));
            assert!(!poll.vote(0));
        }
        assert!(!poll.is_voting_open());
        assert_eq!(poll.options().len(), 2);
        assert_eq!(poll.total_votes(), 0);
        assert_eq!(poll.closed_at(), closed_at);
    }
}
