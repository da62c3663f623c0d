pub mod plurality;

use serde::Serialize;
use std::fmt;

// Read-only tally of a poll, as shown on screen and written by the exporters
#[derive(Debug, Clone, Serialize)]
pub struct PollResults {
    pub title: String,
    pub description: String,
    pub is_open: bool,
    pub is_anonymous: bool,
    pub total_votes: u32,
    pub tallies: Vec<VoteCount>,
}

// Vote count for a single option
#[derive(Debug, Clone, Serialize)]
pub struct VoteCount {
    pub index: usize, // 1-based, as shown to users
    pub option_text: String,
    pub votes: u32,
    pub percentage: f64,
}

impl VoteCount {
    /// Percentage with one decimal place, e.g. `66.7`.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}", self.percentage)
    }
}

impl PollResults {
    pub fn status_label(&self) -> &'static str {
        if self.is_open { "Open" } else { "Closed" }
    }
}

impl fmt::Display for PollResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Poll Results: {}", self.title)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Status: {}", self.status_label())?;
        writeln!(f, "Anonymous: {}", if self.is_anonymous { "Yes" } else { "No" })?;
        writeln!(f, "-------------------------")?;
        for tally in &self.tallies {
            writeln!(
                f,
                "[{}] {}: {} ({} votes, {}%)",
                tally.index,
                tally.option_text,
                "*".repeat(tally.votes as usize),
                tally.votes,
                tally.percentage_label()
            )?;
        }
        Ok(())
    }
}
