//! # Languages
//!
//! The game can, in principle, be played in several languages. Each language
//! determines which characters may appear in words and which resource files
//! hold its word list, reels, and letter scores. A [`Language`] is resolved
//! into an immutable [`LanguageConfig`] once, at startup.

use std::{
	error::Error,
	fmt::{self, Display, Formatter}
};

use clap::ValueEnum;

use crate::validator::{CharRange, WordValidator, LOWERCASE_LATIN};

/// The languages known to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language
{
	/// American English.
	EnUs,

	/// British English.
	EnGb,

	/// Brazilian Portuguese.
	PtBr
}

impl Display for Language
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::EnUs => write!(f, "en-us"),
			Self::EnGb => write!(f, "en-gb"),
			Self::PtBr => write!(f, "pt-br")
		}
	}
}

/// Everything that depends upon the choice of language.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct LanguageConfig
{
	/// The language.
	language: Language,

	/// The characters permitted in words.
	allowed: Vec<CharRange>,

	/// The name of the word list, sans extension.
	words_name: &'static str,

	/// The file name of the reels.
	reels_file: &'static str,

	/// The file name of the letter scores.
	scores_file: &'static str
}

impl LanguageConfig
{
	/// Resolve the configuration for the given language.
	///
	/// # Arguments
	///
	/// * `language` - The language.
	///
	/// # Returns
	///
	/// The configuration of the language.
	///
	/// # Errors
	///
	/// [`UnsupportedLanguage`] if the game doesn't support the language yet.
	pub fn new(language: Language) -> Result<Self, UnsupportedLanguage>
	{
		match language
		{
			Language::EnUs => Ok(Self {
				language,
				allowed: vec![LOWERCASE_LATIN],
				words_name: "american-english-large",
				reels_file: "reels.txt",
				scores_file: "scores.txt"
			}),
			Language::EnGb | Language::PtBr => Err(UnsupportedLanguage(language))
		}
	}

	/// The language.
	#[inline]
	#[must_use]
	pub fn language(&self) -> Language { self.language }

	/// The name of the word list, sans extension. The text file is
	/// `<name>.txt` and its binary cache is `<name>.dict`.
	#[inline]
	#[must_use]
	pub fn words_name(&self) -> &'static str { self.words_name }

	/// The file name of the reels.
	#[inline]
	#[must_use]
	pub fn reels_file(&self) -> &'static str { self.reels_file }

	/// The file name of the letter scores.
	#[inline]
	#[must_use]
	pub fn scores_file(&self) -> &'static str { self.scores_file }

	/// Answer a word validator for the language.
	#[inline]
	pub fn validator(&self) -> WordValidator
	{
		WordValidator::new(self.allowed.clone())
	}
}

/// The requested language isn't supported yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedLanguage(pub Language);

impl Display for UnsupportedLanguage
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "language config {} is not yet supported", self.0)
	}
}

impl Error for UnsupportedLanguage {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
