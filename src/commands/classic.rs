//! Classic line-mode game
//!
//! Plain stdin/stdout play without the TUI: prompt, colored board reprint,
//! help text, and a timed end-of-game summary.

use crate::game::{GameError, GameSession, Outcome};
use crate::output::{print_board, print_help, print_summary, print_welcome};
use crate::wordlists::WordSource;
use std::io::{self, Write};
use std::time::Instant;

/// Run the classic game loop until the player quits
///
/// Each round picks a fresh secret from `words` and plays one session to
/// completion. Invalid submissions are reported and re-prompted without
/// consuming an attempt.
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub fn run_classic<S: WordSource>(words: &S, max_guesses: usize) -> Result<(), String> {
    print_welcome(max_guesses);

    loop {
        let mut session = GameSession::with_max_guesses(words.pick_secret(), max_guesses);
        let started = Instant::now();

        print_board(&session);

        while session.outcome() == Outcome::InProgress {
            let prompt = format!(
                "Guess {}/{}",
                session.guess_count() + 1,
                session.max_guesses()
            );
            let input = get_user_input(&prompt)?;

            match input.to_lowercase().as_str() {
                "" => continue,
                "help" | "h" | "?" => {
                    print_help(session.max_guesses());
                    continue;
                }
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                raw => match session.submit_guess(raw, words).map(|_| ()) {
                    Ok(()) => print_board(&session),
                    Err(err @ (GameError::InvalidLength(_) | GameError::UnknownWord(_))) => {
                        println!("❌ {err}");
                    }
                    // The loop only submits while in progress
                    Err(err @ GameError::SessionOver(_)) => return Err(err.to_string()),
                },
            }
        }

        print_summary(&session, started.elapsed());

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!("\n🔄 New game started!"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
