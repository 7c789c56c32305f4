//! # Tiles
//!
//! A tile is a single letter instance in play, together with the number of
//! points it earns when played.

use std::fmt::{self, Display, Formatter};

/// A single letter in a [reel](crate::reel::Reel) or on the
/// [rack](crate::rack::Rack). The letter never changes; the score is assigned
/// once, after the score table has been loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Tile
{
	/// The letter.
	letter: char,

	/// The points earned by playing the tile.
	score: u32
}

impl Tile
{
	/// Construct an unscored tile.
	#[inline]
	pub fn new(letter: char) -> Self
	{
		Self { letter, score: 0 }
	}

	/// Construct a tile with the given score.
	#[inline]
	pub fn with_score(letter: char, score: u32) -> Self
	{
		Self { letter, score }
	}

	/// The letter.
	#[inline]
	#[must_use]
	pub fn letter(&self) -> char { self.letter }

	/// The points earned by playing the tile.
	#[inline]
	#[must_use]
	pub fn score(&self) -> u32 { self.score }

	/// Assign the score of the tile.
	#[inline]
	pub fn set_score(&mut self, score: u32) { self.score = score; }
}

impl Display for Tile
{
	/// Render the uppercase letter followed by the score in subscript digits,
	/// e.g., `Q₁₀`.
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for c in self.letter.to_uppercase()
		{
			write!(f, "{}", c)?;
		}
		for digit in self.score.to_string().chars()
		{
			write!(f, "{}", subscript(digit))?;
		}
		Ok(())
	}
}

/// Answer the subscript form of an ASCII digit.
#[inline]
#[must_use]
fn subscript(digit: char) -> char
{
	match digit.to_digit(10)
	{
		Some(d) => char::from_u32('₀' as u32 + d).unwrap_or(digit),
		None => digit
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
