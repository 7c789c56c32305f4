//! # Reel Words
//!
//! Reel Words is a word game played against a row of letter reels. The front
//! tile of every reel is on the player's rack, and the player forms words from
//! the rack to earn points. Each tile played spins its reel, exposing a new
//! tile.
//!
//! Via command line options, the user can specify the language and the
//! directory that holds the resource files. Then the user can play either on
//! the console, one line per word, or via a text-based user interface (TUI).

mod app;
mod tui;

use std::{error::Error, process::ExitCode};

use clap::{Parser, Subcommand};
use log::{debug, error, trace};

use app::App;
use reel_words::{
	game::Game,
	language::Language,
	loader::FileDataLoader,
	view::ConsoleView
};
use tui::tui;

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for playing Reel Words.
#[derive(Clone, Debug, Parser)]
#[command(version = "1.0", author = "Todd L Smith")]
struct Opts
{
	/// The name of the directory containing the resource files. The current
	/// directory and each of its ancestors are searched for it.
	#[arg(short = 'd', long, default_value = "resources")]
	directory: String,

	/// The language of the game.
	#[arg(short = 'l', long, value_enum, default_value_t = Language::EnUs)]
	language: Language,

	/// Seed the starting positions of the reels, for a reproducible game.
	#[arg(short = 's', long)]
	seed: Option<u64>,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Copy, Clone, Debug, Subcommand)]
enum Command
{
	/// Just generate the binary dictionary and exit.
	Generate,

	/// Play on the console, one word per line. Type 0 to end the game.
	Play,

	/// Play in the text-based user interface (TUI). The final score will be
	/// written to standard output.
	Tui {
		/// Suppress emission of the final score to standard output.
		#[arg(short = 'q', long)]
		quiet: bool
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main() -> ExitCode
{
	env_logger::init();

	// Parse the command line options.
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);

	match run(opts)
	{
		Ok(()) => ExitCode::SUCCESS,
		Err(e) =>
		{
			error!("{}", e);
			eprintln!("Error: {}", e);
			ExitCode::FAILURE
		}
	}
}

/// Execute the subcommand.
///
/// # Arguments
///
/// * `opts` - The command line options.
///
/// # Errors
///
/// Any [setup error](reel_words::loader::SetupError) that prevents the game
/// from starting, or any I/O error that occurs while playing.
fn run(opts: Opts) -> Result<(), Box<dyn Error>>
{
	let loader = FileDataLoader::new(opts.language, &opts.directory)?
		.with_seed(opts.seed);
	match opts.command
	{
		Command::Generate =>
		{
			loader.load_dictionary()?;
			trace!("Exiting after generating binary dictionary");
		},
		Command::Play =>
		{
			let mut game = Game::load(&loader)?;
			let mut view = ConsoleView::stdio();
			game.run(&mut view)?;
		},
		Command::Tui { quiet } =>
		{
			let game = Game::load(&loader)?;
			trace!("Opening TUI");
			let score = tui(|terminal| App::new(game).run(terminal))?;
			if !quiet
			{
				print_score(score);
			}
		}
	}
	Ok(())
}

/// Print the final score to standard output.
///
/// # Arguments
///
/// * `score` - The final score.
fn print_score(score: u32)
{
	println!("The Reel Words Game is over. Your total score is {}.", score);
}
