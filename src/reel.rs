//! # Reels
//!
//! A reel is a rotating sequence of [tiles](Tile), much like the reel of a
//! slot machine: only the front tile is showing, and playing it spins the reel
//! by one position.

use std::collections::{HashMap, VecDeque};

use rand::Rng;

use crate::tile::Tile;

/// An ordered, rotating sequence of tiles. The number of tiles never changes
/// once the reel is constructed; playing only reorders them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Reel
{
	/// The tiles, front first.
	tiles: VecDeque<Tile>
}

impl Reel
{
	/// Construct a reel from its tiles, front first.
	///
	/// # Arguments
	///
	/// * `tiles` - The tiles, front first.
	///
	/// # Returns
	///
	/// The reel, or `None` if `tiles` is empty.
	pub fn new<I: IntoIterator<Item = Tile>>(tiles: I) -> Option<Self>
	{
		let tiles = tiles.into_iter().collect::<VecDeque<_>>();
		if tiles.is_empty()
		{
			None
		}
		else
		{
			Some(Self { tiles })
		}
	}

	/// The number of tiles on the reel.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.tiles.len() }

	/// Always `false`; a reel holds at least one tile.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.tiles.is_empty() }

	/// Iterate over the tiles, front first.
	#[inline]
	pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_
	{
		self.tiles.iter()
	}

	/// The tile currently showing.
	#[inline]
	pub fn peek_front(&self) -> &Tile
	{
		&self.tiles[0]
	}

	/// Play the tile currently showing: move it from the front of the reel to
	/// the back, exposing the next tile.
	///
	/// # Returns
	///
	/// The played tile.
	pub fn play_front(&mut self) -> Tile
	{
		self.tiles.rotate_left(1);
		self.tiles[self.tiles.len() - 1]
	}

	/// Spin the reel to a random starting position, using the thread-local
	/// random number generator.
	pub fn shuffle(&mut self)
	{
		self.shuffle_with_rng(&mut rand::rng());
	}

	/// Spin the reel to a random starting position. The reel rotates by one a
	/// random number of times in `[0, len]`; the relative order of the tiles
	/// is preserved, only the starting offset changes.
	///
	/// # Arguments
	///
	/// * `rng` - The random number generator.
	pub fn shuffle_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R)
	{
		let spins = rng.random_range(0 ..= self.tiles.len());
		self.tiles.rotate_left(spins % self.tiles.len());
	}

	/// Assign scores to every tile from the given table.
	///
	/// # Arguments
	///
	/// * `scores` - The score of each letter.
	///
	/// # Errors
	///
	/// The first letter without a score.
	pub fn assign_scores(&mut self, scores: &HashMap<char, u32>)
		-> Result<(), char>
	{
		for tile in self.tiles.iter_mut()
		{
			let score = scores.get(&tile.letter()).ok_or(tile.letter())?;
			tile.set_score(*score);
		}
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
