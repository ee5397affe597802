//! Terminal Wordle - CLI
//!
//! Word-guessing game with a TUI mode and a classic line mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use terminal_wordle::{
    commands::run_classic,
    game::DEFAULT_MAX_GUESSES,
    wordlists::{ALLOWED, ANSWERS, Dictionary, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "terminal_wordle",
    about = "Guess the secret five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'answers' (secrets only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Number of guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    guesses: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Classic line mode (plain prompt, colored rows)
    Classic,
}

/// Build the dictionary selected by the -w flag
///
/// - "all": embedded answers as secrets, full embedded list as guesses
/// - "answers": only answer words accepted as guesses
/// - "<path>": custom list, used for both secrets and guesses
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    use terminal_wordle::wordlists::loader::load_from_file;

    let dictionary = match wordlist_mode {
        "all" => Dictionary::embedded(),
        "answers" => {
            let answers = words_from_slice(ANSWERS);
            Dictionary::new(answers, &[])?
        }
        path => {
            let custom_words = load_from_file(path)?;
            let allowed = words_from_slice(ALLOWED);
            Dictionary::new(custom_words, &allowed)?
        }
    };

    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    anyhow::ensure!(cli.guesses > 0, "Guess budget must be at least 1");

    let words = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, cli.guesses),
        Commands::Classic => {
            run_classic(&words, cli.guesses).map_err(|e| anyhow::anyhow!(e))
        }
    }
}

fn run_play_command(words: &Dictionary, max_guesses: usize) -> Result<()> {
    use terminal_wordle::interactive::{App, run_tui};

    let app = App::new(words, max_guesses);
    run_tui(app)
}
