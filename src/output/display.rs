//! Board, keyboard, and summary printing for the line-mode game

use super::formatters::{feedback_to_emoji, format_elapsed, guess_row, keyboard_line};
use crate::core::WORD_LENGTH;
use crate::game::{GameSession, Outcome};
use colored::Colorize;
use std::time::Duration;

/// Print the welcome banner shown before the first prompt
pub fn print_welcome(max_guesses: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TERMINAL WORDLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nGuess the secret {WORD_LENGTH}-letter word in {max_guesses} tries."
    );
    println!("Type 'help' for the rules, 'quit' to leave.\n");
}

/// Print the rules
pub fn print_help(max_guesses: usize) {
    println!("\n{}", "How to play".bright_cyan().bold());
    println!("  Enter any accepted {WORD_LENGTH}-letter word as a guess.");
    println!("  After each guess every letter is colored:");
    println!("    {} the letter is in the right spot", " A ".black().on_green());
    println!("    {} the letter is in the word, elsewhere", " A ".black().on_yellow());
    println!(
        "    {} the letter is not in the word",
        " A ".white().on_bright_black()
    );
    println!("  Wrong-length or unrecognized words don't use up a try.");
    println!("  You have {max_guesses} tries. Good luck!\n");
}

/// Print the board: every scored guess plus the keyboard line
pub fn print_board(session: &GameSession) {
    println!();
    for guess in session.guesses() {
        println!("  {}", guess_row(guess));
    }
    for _ in session.guess_count()..session.max_guesses() {
        println!("  {}", format!(" {} ", "·").repeat(WORD_LENGTH).bright_black());
    }
    println!("\n  {}\n", keyboard_line(session.keyboard()));
}

/// Print the end-of-game summary with the share grid and play time
pub fn print_summary(session: &GameSession, elapsed: Duration) {
    println!();
    match session.outcome() {
        Outcome::Won => {
            let count = session.guess_count();
            println!(
                "{}",
                format!(
                    "🎉 You won in {count} {}!",
                    if count == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        Outcome::Lost => {
            println!("{}", "❌ Out of guesses!".red().bold());
            println!(
                "The word was {}",
                session.secret().text().to_uppercase().bright_yellow().bold()
            );
        }
        Outcome::InProgress => {
            println!("{}", "Game abandoned.".bright_black());
        }
    }

    println!("Time played: {}", format_elapsed(elapsed));

    if session.outcome().is_terminal() {
        println!(
            "\n{} {}/{}",
            "Wordle".bold(),
            if session.outcome() == Outcome::Won {
                session.guess_count().to_string()
            } else {
                "X".to_string()
            },
            session.max_guesses()
        );
        for guess in session.guesses() {
            println!("{}", feedback_to_emoji(guess.feedback()));
        }
    }
    println!();
}
