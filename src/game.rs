//! # Game
//!
//! Herein is the game session: the dictionary, the rack, the validator, and
//! the running score, together with the turn logic that ties them together.
//! Each turn, the player's input is validated, looked up in the dictionary,
//! and finally played from the rack. A rejection at any step is an ordinary
//! [`Turn`] outcome, not an error.

use std::{
	fmt::{self, Display, Formatter},
	io
};

use log::{debug, info};

use crate::{
	dictionary::Dictionary,
	loader::{DataLoader, ReelWordsData, SetupError},
	rack::Rack,
	validator::WordValidator,
	view::View
};

////////////////////////////////////////////////////////////////////////////////
//                                  Session.                                  //
////////////////////////////////////////////////////////////////////////////////

/// A single game session.
#[derive(Clone, Debug)]
#[must_use]
pub struct Game
{
	/// The valid words.
	dictionary: Dictionary,

	/// The playable tiles, fed by the reels.
	rack: Rack,

	/// The validator for player input.
	validator: WordValidator,

	/// The running score.
	score: u32
}

impl Game
{
	/// Start a session over the given data.
	///
	/// # Arguments
	///
	/// * `data` - The game data.
	///
	/// # Returns
	///
	/// A fresh session with a score of zero.
	pub fn new(data: ReelWordsData) -> Self
	{
		let (dictionary, reels, validator) = data.into_parts();
		Self { dictionary, rack: Rack::new(reels), validator, score: 0 }
	}

	/// Load the game data and start a session over it.
	///
	/// # Arguments
	///
	/// * `loader` - The source of the game data.
	///
	/// # Errors
	///
	/// Any [`SetupError`] raised by the loader.
	pub fn load<L: DataLoader + ?Sized>(loader: &L) -> Result<Self, SetupError>
	{
		info!("Initializing game data...");
		let game = Self::new(loader.load()?);
		info!("Game data initialized successfully.");
		Ok(game)
	}

	/// The running score.
	#[inline]
	#[must_use]
	pub fn score(&self) -> u32 { self.score }

	/// The playable tiles.
	#[inline]
	pub fn rack(&self) -> &Rack { &self.rack }

	/// Play a turn. Input is case-insensitive.
	///
	/// # Arguments
	///
	/// * `input` - The word proposed by the player.
	///
	/// # Returns
	///
	/// The outcome of the turn.
	pub fn play(&mut self, input: &str) -> Turn
	{
		let word = input.to_lowercase();
		let turn =
			if !self.validator.is_valid(&word)
			{
				Turn::Invalid(word)
			}
			else if !self.dictionary.contains(&word)
			{
				Turn::NotInDictionary(word)
			}
			else
			{
				match self.rack.try_play(&word)
				{
					Some(points) =>
					{
						self.score += points;
						Turn::Accepted { word, points, total: self.score }
					},
					None => Turn::NotOnRack(word)
				}
			};
		debug!("turn: {:?}", turn);
		turn
	}

	/// Run the session to completion, reading words from the view until the
	/// player quits or the input ends.
	///
	/// # Arguments
	///
	/// * `view` - The view.
	///
	/// # Returns
	///
	/// The final score.
	///
	/// # Errors
	///
	/// Any error that occurs while driving the view.
	pub fn run<V: View + ?Sized>(&mut self, view: &mut V) -> io::Result<u32>
	{
		view.display_text_line(
			"\n***************************\n\
				***** Reel Words Game *****\n\
				***************************"
		)?;
		view.display_text_line(
			&format!("--> Type '{}' to end the game.", QUIT)
		)?;
		loop
		{
			view.display_text_line("")?;
			view.display_text_line(&self.rack.to_string())?;
			view.display_text("Create a word using the letters from your rack: ")?;
			let Some(line) = view.read_text_line()? else { break };
			match Command::parse(&line)
			{
				Command::Quit => break,
				Command::Word(word) =>
				{
					let turn = self.play(word);
					view.display_text_line(&turn.to_string())?;
				}
			}
		}
		view.display_text_line(&format!(
			"The Reel Words Game is over. Your total score is {}.",
			self.score
		))?;
		view.display_text_line("CONGRATULATIONS! WELL PLAYED!")?;
		Ok(self.score)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Turns.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The input that ends the session.
pub const QUIT: &str = "0";

/// A line of player input, interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a>
{
	/// End the session.
	Quit,

	/// Attempt to play a word.
	Word(&'a str)
}

impl<'a> Command<'a>
{
	/// Interpret a line of player input. Only [`QUIT`] ends the session;
	/// anything else is an attempted word.
	#[must_use]
	pub fn parse(line: &'a str) -> Self
	{
		if line.trim() == QUIT { Self::Quit } else { Self::Word(line) }
	}
}

/// The outcome of a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn
{
	/// The word was played.
	Accepted
	{
		/// The word.
		word: String,

		/// The points earned by the word.
		points: u32,

		/// The running score, including the word.
		total: u32
	},

	/// The word contains forbidden characters or is too short.
	Invalid(String),

	/// The word isn't in the dictionary.
	NotInDictionary(String),

	/// The word can't be made from the tiles on the rack.
	NotOnRack(String)
}

impl Turn
{
	/// Check whether the word was played.
	#[inline]
	#[must_use]
	pub fn is_accepted(&self) -> bool
	{
		matches!(self, Self::Accepted { .. })
	}
}

impl Display for Turn
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Accepted { word, points, total } => write!(
				f,
				"Good job! You earned {} points from the word '{}'. \
					Total score: {}.",
				points,
				word,
				total
			),
			Self::Invalid(word) => write!(
				f,
				"The word '{}' is not valid. Please try again.",
				word
			),
			Self::NotInDictionary(word) => write!(
				f,
				"The word '{}' does not exist in the dictionary. \
					Please try again.",
				word
			),
			Self::NotOnRack(word) => write!(
				f,
				"The word '{}' cannot be made from the letters on your rack. \
					Please try again.",
				word
			)
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
