use crate::models::Poll;
use crate::voting::{PollResults, VoteCount};

pub fn calculate_results(poll: &Poll) -> PollResults {
    let total_votes = poll.total_votes();

    // Options keep their insertion order; no sorting by score here
    let tallies = poll
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| VoteCount {
            index: i + 1,
            option_text: option.text.clone(),
            votes: option.votes,
            percentage: percentage(option.votes, total_votes),
        })
        .collect();

    PollResults {
        title: poll.title().to_string(),
        description: poll.description().to_string(),
        is_open: poll.is_voting_open(),
        is_anonymous: poll.is_anonymous(),
        total_votes,
        tallies,
    }
}

/// Share of `total` in percent; a poll with no votes reports 0.0 everywhere.
pub fn percentage(votes: u32, total: u32) -> f64 {
    if total > 0 {
        f64::from(votes) * 100.0 / f64::from(total)
    } else {
        0.0
    }
}
