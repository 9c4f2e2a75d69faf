//! Round controller and session loop.

use log::{debug, info};

use crate::console::{prompt_char, prompt_number, Console, ConsoleError};
use crate::core::{BestScore, GuessRange, RoundConfig};
use crate::rules::{GuessOutcome, Round, RoundResult, SecretSource};

use super::{RoundRecord, SessionStats};

pub const PROMPT_MIN: &str = "Enter minimum number: ";
pub const PROMPT_MAX: &str = "Enter maximum number: ";
pub const PROMPT_GUESS_LIMIT: &str = "Enter max number of guesses allowed: ";
pub const PROMPT_GUESS: &str = "Enter your guess: ";
pub const PROMPT_PLAY_AGAIN: &str = "Do you want to play again? (y/n): ";

pub const MAX_NOT_ABOVE_MIN: &str = "Max should be greater than min. Try again.\n";
pub const GAME_STARTED: &str = "\n--- Game Started! ---\n";
pub const TOO_LOW: &str = "Too low. Try again.\n";
pub const TOO_HIGH: &str = "Too high. Try again.\n";
pub const NEW_BEST: &str = "🏆 New best score!\n";
pub const FAREWELL: &str = "Thanks for playing! 👋\n";

fn correct_message(guesses: u64) -> String {
    format!("🎉 Correct! You guessed it in {} attempts.\n", guesses)
}

fn lost_message(secret: i64) -> String {
    format!("❌ You've run out of guesses! The correct number was: {}\n", secret)
}

fn best_so_far_message(best: u64) -> String {
    format!("🔥 Best score so far: {} attempts.\n", best)
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user answered the replay prompt with anything but `y`/`Y`.
    Declined,
    /// Input ran out.
    EndOfInput,
}

/// Ask for a range until `max > min`.
///
/// Only the maximum is asked again after a rejection.
fn collect_range<C: Console + ?Sized>(console: &mut C) -> Result<GuessRange, ConsoleError> {
    let min = prompt_number(console, PROMPT_MIN)?;
    let mut max = prompt_number(console, PROMPT_MAX)?;
    loop {
        match GuessRange::new(min, max) {
            Ok(range) => return Ok(range),
            Err(err) => {
                debug!("Rejected range: {}", err);
                console.print(MAX_NOT_ABOVE_MIN)?;
                max = prompt_number(console, PROMPT_MAX)?;
            }
        }
    }
}

/// Play one round from range selection to outcome report.
///
/// `best` is the session's best score going in; it is updated in place when
/// this round beats it.
pub fn play_round<C, S>(
    console: &mut C,
    secrets: &mut S,
    best: &mut BestScore,
) -> Result<RoundRecord, ConsoleError>
where
    C: Console + ?Sized,
    S: SecretSource + ?Sized,
{
    let range = collect_range(console)?;
    let secret = secrets.draw(&range);
    let guess_limit = prompt_number(console, PROMPT_GUESS_LIMIT)?;
    let config = RoundConfig::new(range, guess_limit);

    console.print(GAME_STARTED)?;

    let mut round = Round::new(config, secret);
    while !round.is_over() {
        let guess = prompt_number(console, PROMPT_GUESS)?;
        let outcome = round.guess(guess);
        debug!("Guess {} of {}: {} -> {:?}", round.guess_count(), guess_limit, guess, outcome);

        match outcome {
            GuessOutcome::Correct => {
                console.print(&correct_message(round.guess_count()))?;
                if best.record_win(round.guess_count()) {
                    console.print(NEW_BEST)?;
                }
            }
            GuessOutcome::TooLow => console.print(TOO_LOW)?,
            GuessOutcome::TooHigh => console.print(TOO_HIGH)?,
        }
    }

    let result = round.finish();
    if let RoundResult::Lost { secret } = result {
        console.print(&lost_message(secret))?;
    }
    if let Some(best) = best.get() {
        console.print(&best_so_far_message(best))?;
    }

    Ok(RoundRecord {
        range,
        guess_limit,
        secret,
        result,
    })
}

/// A play session: rounds until the user stops.
///
/// Owns the console, the secret source and the session state (best score
/// and round history). Nothing outlives the session.
pub struct Session<C, S> {
    console: C,
    secrets: S,
    best: BestScore,
    history: Vec<RoundRecord>,
}

impl<C: Console, S: SecretSource> Session<C, S> {
    /// Create a session with no rounds played.
    pub fn new(console: C, secrets: S) -> Self {
        Self {
            console,
            secrets,
            best: BestScore::new(),
            history: Vec::new(),
        }
    }

    /// Best score so far.
    #[must_use]
    pub fn best_score(&self) -> BestScore {
        self.best
    }

    /// Finished rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Statistics over the finished rounds.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats::from_history(&self.history)
    }

    /// The console this session talks to.
    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Consume the session, returning the console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Play one round and record it.
    pub fn play_round(&mut self) -> Result<&RoundRecord, ConsoleError> {
        let record = play_round(&mut self.console, &mut self.secrets, &mut self.best)?;
        info!(
            "Round {} over: {:?} (range {}, limit {})",
            self.history.len() + 1,
            record.result,
            record.range,
            record.guess_limit
        );
        self.history.push(record);
        Ok(&self.history[self.history.len() - 1])
    }

    /// Ask whether to play again. Only `y` or `Y` continues.
    pub fn wants_replay(&mut self) -> Result<bool, ConsoleError> {
        let answer = prompt_char(&mut self.console, PROMPT_PLAY_AGAIN)?;
        Ok(matches!(answer, 'y' | 'Y'))
    }

    /// Play rounds until the user declines a replay or input runs out.
    ///
    /// Both endings print the farewell. Only I/O failures are errors.
    pub fn run(&mut self) -> Result<SessionEnd, ConsoleError> {
        let end = loop {
            let step = self.play_round().map(|_| ()).and_then(|()| self.wants_replay());
            match step {
                Ok(true) => continue,
                Ok(false) => break SessionEnd::Declined,
                Err(ConsoleError::EndOfInput) => {
                    self.console.print("\n")?;
                    break SessionEnd::EndOfInput;
                }
                Err(err) => return Err(err),
            }
        };

        self.console.print(FAREWELL)?;
        info!("Session ended ({:?}): {}", end, self.stats());
        Ok(end)
    }
}
