use std::io::{BufRead, Write};

use log::info;

use crate::error::{PollError, Result};
use crate::handlers::Session;

/// Interactive voting on the current poll.
///
/// Users pick options 1-based; `0` leaves the loop. Bad input is reported and
/// asked again, it never aborts the menu.
pub fn conduct_voting<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let poll = session.registry.open_poll()?;
    let option_count = poll.options().len();
    if option_count == 0 {
        return Err(PollError::EmptyPoll);
    }
    let results = poll.display_results();
    writeln!(session.output, "\nCurrent Poll:\n{}", results)?;

    let mut recorded = 0usize;
    loop {
        let input = session.prompt("\nEnter option number to vote (0 to exit): ")?;
        let input = input.trim();
        if input == "0" {
            break;
        }

        // Negative numbers are out of range, not malformed
        match input.parse::<i64>() {
            Ok(choice) if choice >= 1 && choice as usize <= option_count => {
                if session.registry.vote(choice as usize - 1)? {
                    recorded += 1;
                    writeln!(session.output, "Vote recorded successfully!")?;
                } else {
                    writeln!(session.output, "Failed to record vote!")?;
                }
            }
            Ok(_) => writeln!(
                session.output,
                "Invalid option. Please enter between 1-{}",
                option_count
            )?,
            Err(_) => writeln!(session.output, "Invalid input. Please enter a number.")?,
        }
    }

    info!("Voting session ended with {} vote(s) recorded", recorded);
    Ok(())
}
