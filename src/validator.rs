//! # Word validation
//!
//! Lexical validation of candidate words. Every line of the word list passes
//! through a [`WordValidator`] before it enters the
//! [dictionary](crate::dictionary::Dictionary), and every word that the
//! player submits is checked again before the dictionary or the
//! [rack](crate::rack::Rack) are consulted.

use std::{
	error::Error,
	fmt::{self, Display, Formatter}
};

////////////////////////////////////////////////////////////////////////////////
//                              Character ranges.                             //
////////////////////////////////////////////////////////////////////////////////

/// An inclusive, contiguous range of characters permitted in words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct CharRange
{
	/// The lowest permitted character.
	min: char,

	/// The highest permitted character.
	max: char
}

impl CharRange
{
	/// Construct a character range.
	///
	/// # Arguments
	///
	/// * `min` - The lowest permitted character.
	/// * `max` - The highest permitted character.
	///
	/// # Returns
	///
	/// The requested range.
	///
	/// # Errors
	///
	/// [`InvalidCharRange`] if `min` is greater than `max`.
	pub fn new(min: char, max: char) -> Result<Self, InvalidCharRange>
	{
		if min > max
		{
			Err(InvalidCharRange { min, max })
		}
		else
		{
			Ok(Self { min, max })
		}
	}

	/// Check whether the range covers the given character.
	#[inline]
	#[must_use]
	pub fn contains(&self, c: char) -> bool
	{
		(self.min ..= self.max).contains(&c)
	}
}

/// The lowercase Latin alphabet, `a` through `z`.
pub const LOWERCASE_LATIN: CharRange = CharRange { min: 'a', max: 'z' };

/// A [`CharRange`] was requested with its bounds reversed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidCharRange
{
	/// The requested lower bound.
	pub min: char,

	/// The requested upper bound.
	pub max: char
}

impl Display for InvalidCharRange
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(
			f,
			"invalid character range: min = {:?} | max = {:?}",
			self.min,
			self.max
		)
	}
}

impl Error for InvalidCharRange {}

////////////////////////////////////////////////////////////////////////////////
//                                 Validator.                                 //
////////////////////////////////////////////////////////////////////////////////

/// Words shorter than this are never valid.
pub const MIN_WORD_LENGTH: usize = 2;

/// A pure predicate over raw input strings. A word is valid only if it is not
/// blank, has at least [`MIN_WORD_LENGTH`] characters, and every character
/// falls within at least one of the allowed ranges. The rules are applied in
/// that order, and the first failing rule rejects the word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct WordValidator
{
	/// The allowed character ranges.
	allowed: Vec<CharRange>
}

impl WordValidator
{
	/// Construct a validator for the given character ranges.
	///
	/// # Arguments
	///
	/// * `allowed` - The allowed character ranges.
	///
	/// # Returns
	///
	/// The requested validator.
	pub fn new(allowed: Vec<CharRange>) -> Self
	{
		Self { allowed }
	}

	/// The allowed character ranges.
	#[inline]
	#[must_use]
	pub fn allowed(&self) -> &[CharRange]
	{
		&self.allowed
	}

	/// Check whether the given word is valid.
	///
	/// # Arguments
	///
	/// * `word` - The candidate word.
	///
	/// # Returns
	///
	/// `true` if the word is valid, `false` otherwise.
	#[must_use]
	pub fn is_valid(&self, word: &str) -> bool
	{
		if word.trim().is_empty()
		{
			return false
		}
		if word.chars().count() < MIN_WORD_LENGTH
		{
			return false
		}
		word.chars()
			.all(|c| self.allowed.iter().any(|range| range.contains(c)))
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
