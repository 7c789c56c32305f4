//! # Rack
//!
//! The rack is what the player sees: the front tile of every reel, in reel
//! order. Herein is the algorithm that decides whether a word can be built
//! from the rack, and that spins the reels when it can.

use std::fmt::{self, Display, Formatter};

use log::trace;

use crate::{reel::Reel, tile::Tile};

/// The playable tiles, one per reel. The rack owns its reels and is refreshed
/// from them after every successful play, so `tiles().len()` always equals
/// the number of reels.
#[derive(Clone, Debug)]
#[must_use]
pub struct Rack
{
	/// The reels that feed the rack.
	reels: Vec<Reel>,

	/// The front tile of every reel, in reel order.
	tiles: Vec<Tile>
}

impl Rack
{
	/// Construct a rack over the given reels.
	///
	/// # Arguments
	///
	/// * `reels` - The reels that feed the rack.
	///
	/// # Returns
	///
	/// The rack, showing the front tile of every reel.
	pub fn new(reels: Vec<Reel>) -> Self
	{
		let mut rack = Self { reels, tiles: Vec::new() };
		rack.update();
		rack
	}

	/// The playable tiles, in reel order.
	#[inline]
	#[must_use]
	pub fn tiles(&self) -> &[Tile] { &self.tiles }

	/// The reels that feed the rack.
	#[inline]
	#[must_use]
	pub fn reels(&self) -> &[Reel] { &self.reels }

	/// The number of tiles on the rack.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.tiles.len() }

	/// Check whether the rack has no tiles at all.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.tiles.is_empty() }

	/// Try to play the given word from the rack.
	///
	/// Each letter of the word claims the first unclaimed tile bearing that
	/// letter, scanning the rack in reel order, so a letter can be used only
	/// as many times as it appears on the rack. If every letter is claimed,
	/// the reel behind every claimed tile spins by one and the rack is
	/// refreshed. Otherwise nothing changes.
	///
	/// # Arguments
	///
	/// * `word` - The word to play.
	///
	/// # Returns
	///
	/// The points earned, or `None` if the word is empty or cannot be built
	/// from the rack.
	pub fn try_play(&mut self, word: &str) -> Option<u32>
	{
		if word.is_empty()
		{
			return None
		}
		if word.chars().count() > self.tiles.len()
		{
			trace!("not enough tiles for {}", word);
			return None
		}
		let mut claimed = vec![false; self.tiles.len()];
		for letter in word.chars()
		{
			let index = self.tiles.iter()
				.zip(claimed.iter())
				.position(|(tile, &used)| !used && tile.letter() == letter)?;
			claimed[index] = true;
		}
		let score: u32 = self.reels.iter_mut()
			.zip(claimed)
			.filter(|(_, used)| *used)
			.map(|(reel, _)| reel.play_front().score())
			.sum();
		self.update();
		Some(score)
	}

	/// Refresh the tiles from the front of every reel.
	fn update(&mut self)
	{
		self.tiles = self.reels.iter()
			.map(|reel| *reel.peek_front())
			.collect();
	}
}

impl Display for Rack
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		writeln!(f, "------------------------------------")?;
		write!(f, "    ")?;
		for tile in &self.tiles
		{
			write!(f, " {} ", tile)?;
		}
		writeln!(f, "    ")?;
		write!(f, "------------------------------------")
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::{rack::Rack, reel::Reel, tile::Tile};

	/// The test reels, laid out by row. Each column is one reel, read from top
	/// to bottom. The first row spells "program" backwards.
	const ROWS: [&str; 6] = [
		"margorp",
		"hijklmn",
		"opqrstu",
		"vwxyzab",
		"cdefghi",
		"jklmnop"
	];

	/// Answer the reels described by [`ROWS`], with every tile worth 1 point.
	fn reels() -> Vec<Reel>
	{
		let columns = ROWS[0].len();
		(0 .. columns)
			.map(|column| {
				Reel::new(ROWS.iter().map(|row| {
					let letter = row.chars().nth(column).unwrap();
					Tile::with_score(letter, 1)
				}))
				.unwrap()
			})
			.collect()
	}

	/// Answer the letters currently on the rack.
	fn letters(rack: &Rack) -> String
	{
		rack.tiles().iter().map(Tile::letter).collect()
	}

	/// Ensure that the rack shows the first row of the reels.
	#[test]
	fn test_new()
	{
		let rack = Rack::new(reels());
		assert_eq!(rack.len(), 7);
		assert_eq!(rack.len(), rack.reels().len());
		assert_eq!(letters(&rack), ROWS[0]);
	}

	/// Ensure that a word spelled by the whole rack earns a point per letter
	/// and exposes the second row.
	#[test]
	fn test_play_success()
	{
		let mut rack = Rack::new(reels());
		assert_eq!(rack.try_play("program"), Some(7));
		assert_eq!(letters(&rack), ROWS[1]);
		assert_eq!(rack.len(), 7);
	}

	/// Ensure that an infeasible word earns nothing and changes nothing.
	#[test]
	fn test_play_fail()
	{
		let mut rack = Rack::new(reels());
		let before = rack.reels().to_vec();
		assert_eq!(rack.try_play("walnut"), None);
		assert_eq!(letters(&rack), ROWS[0]);
		assert_eq!(rack.reels(), before.as_slice());
	}

	/// Ensure that a word longer than the rack is refused outright.
	#[test]
	fn test_play_too_long()
	{
		let mut rack = Rack::new(reels());
		let before = rack.reels().to_vec();
		assert_eq!(rack.try_play("programs"), None);
		assert_eq!(rack.reels(), before.as_slice());
	}

	/// Ensure that the empty word is never a successful play.
	#[test]
	fn test_play_empty()
	{
		let mut rack = Rack::new(reels());
		let before = rack.reels().to_vec();
		assert_eq!(rack.try_play(""), None);
		assert_eq!(rack.reels(), before.as_slice());
		assert_eq!(letters(&rack), ROWS[0]);
	}

	/// Ensure that a letter can't be used more often than it appears, and
	/// that a failure midway consumes nothing.
	#[test]
	fn test_play_multiplicity()
	{
		let mut rack = Rack::new(reels());
		let before = rack.reels().to_vec();
		// Only one 'a' on the rack.
		assert_eq!(rack.try_play("gaga"), None);
		assert_eq!(rack.reels(), before.as_slice());
		// Two 'r's on the rack.
		assert_eq!(rack.try_play("rr"), Some(2));
	}

	/// Ensure that only the reels behind the played tiles spin, that each
	/// spins exactly once, and that duplicate letters are claimed in rack
	/// order.
	#[test]
	fn test_play_rotation()
	{
		let mut rack = Rack::new(reels());
		let before = rack.reels().to_vec();
		// 'r' appears at positions 2 and 5; the first is claimed.
		assert_eq!(rack.try_play("ram"), Some(3));
		assert_eq!(letters(&rack), "hijgorp");
		for (index, (after, before)) in rack.reels().iter()
			.zip(before.iter())
			.enumerate()
		{
			if [0, 1, 2].contains(&index)
			{
				let mut expected = before.clone();
				let played = expected.play_front();
				assert_eq!(after, &expected);
				assert_eq!(after.tiles().last(), Some(&played));
			}
			else
			{
				assert_eq!(after, before);
			}
		}
	}

	/// Ensure that scores come from the played tiles.
	#[test]
	fn test_play_score()
	{
		let reels = ["ab", "cd", "ef"].iter()
			.enumerate()
			.map(|(i, column)| {
				Reel::new(column.chars().map(|c| {
					Tile::with_score(c, i as u32 + 1)
				}))
				.unwrap()
			})
			.collect();
		let mut rack = Rack::new(reels);
		assert_eq!(letters(&rack), "ace");
		assert_eq!(rack.try_play("ea"), Some(4));
		assert_eq!(letters(&rack), "bcf");
	}

	/// Ensure that the rack renders every tile.
	#[test]
	fn test_display()
	{
		let rack = Rack::new(reels());
		let rendered = rack.to_string();
		assert!(rendered.contains(" M₁  A₁  R₁  G₁  O₁  R₁  P₁ "));
	}
}
