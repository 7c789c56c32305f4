//! # Data loading
//!
//! Everything the game needs is loaded once, at startup, as a single
//! [`ReelWordsData`]. The [`DataLoader`] trait hides where the data comes
//! from; [`FileDataLoader`] reads it from a resource directory containing a
//! word list, a reels file, and a letter score table. The three files are
//! independent, so they are read in parallel.

use std::{
	collections::HashMap,
	env,
	error::Error,
	fmt::{self, Display, Formatter},
	fs::File,
	io::{self, BufRead, BufReader},
	path::{Path, PathBuf},
	thread::{self, ScopedJoinHandle},
	time::Instant
};

use log::{debug, info, trace};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
	dictionary::Dictionary,
	language::{Language, LanguageConfig, UnsupportedLanguage},
	reel::Reel,
	tile::Tile,
	validator::WordValidator
};

////////////////////////////////////////////////////////////////////////////////
//                                 Game data.                                 //
////////////////////////////////////////////////////////////////////////////////

/// All of the data required to play, fully validated and scored. The reels
/// are already spun to their starting positions.
#[derive(Clone, Debug)]
#[must_use]
pub struct ReelWordsData
{
	/// The valid words.
	dictionary: Dictionary,

	/// The reels, in rack order.
	reels: Vec<Reel>,

	/// The validator for player input.
	validator: WordValidator
}

impl ReelWordsData
{
	/// Bundle the game data.
	///
	/// # Arguments
	///
	/// * `dictionary` - The valid words.
	/// * `reels` - The reels, in rack order, with every tile scored.
	/// * `validator` - The validator for player input.
	pub fn new(
		dictionary: Dictionary,
		reels: Vec<Reel>,
		validator: WordValidator
	) -> Self
	{
		Self { dictionary, reels, validator }
	}

	/// The valid words.
	#[inline]
	pub fn dictionary(&self) -> &Dictionary { &self.dictionary }

	/// The reels, in rack order.
	#[inline]
	#[must_use]
	pub fn reels(&self) -> &[Reel] { &self.reels }

	/// The validator for player input.
	#[inline]
	pub fn validator(&self) -> &WordValidator { &self.validator }

	/// Take the data apart.
	#[inline]
	#[must_use]
	pub fn into_parts(self) -> (Dictionary, Vec<Reel>, WordValidator)
	{
		(self.dictionary, self.reels, self.validator)
	}
}

/// A source of [`ReelWordsData`].
pub trait DataLoader
{
	/// Load the game data. The result is all or nothing: if any part fails to
	/// load, no data is produced.
	///
	/// # Errors
	///
	/// Any [`SetupError`] that prevents the game from starting.
	fn load(&self) -> Result<ReelWordsData, SetupError>;
}

////////////////////////////////////////////////////////////////////////////////
//                               File loading.                                //
////////////////////////////////////////////////////////////////////////////////

/// Loads [`ReelWordsData`] from the resource files of a language.
#[derive(Clone, Debug)]
#[must_use]
pub struct FileDataLoader
{
	/// The language configuration.
	config: LanguageConfig,

	/// The directory containing the resource files.
	directory: PathBuf,

	/// The seed for the starting positions of the reels, if reproducible
	/// starting positions are wanted.
	seed: Option<u64>
}

impl FileDataLoader
{
	/// Construct a loader for the given language. The resource directory is
	/// found by searching the current directory and then each of its
	/// ancestors for a directory with the given name.
	///
	/// # Arguments
	///
	/// * `language` - The language.
	/// * `directory_name` - The name of the resource directory.
	///
	/// # Errors
	///
	/// * [`SetupError::UnsupportedLanguage`] if the language isn't supported.
	/// * [`SetupError::DirectoryNotFound`] if no such directory exists.
	pub fn new(
		language: Language,
		directory_name: &str
	) -> Result<Self, SetupError>
	{
		let config = LanguageConfig::new(language)?;
		info!("Language set to '{}'", language);
		let start = env::current_dir()
			.map_err(|e| SetupError::io(".", e))?;
		let directory = find_directory(&start, directory_name)
			.ok_or_else(|| SetupError::DirectoryNotFound(
				directory_name.to_string()
			))?;
		info!("Resource directory found: {}", directory.display());
		Ok(Self { config, directory, seed: None })
	}

	/// Construct a loader for the given language that reads from exactly the
	/// specified directory.
	///
	/// # Arguments
	///
	/// * `language` - The language.
	/// * `directory` - The resource directory.
	///
	/// # Errors
	///
	/// [`SetupError::UnsupportedLanguage`] if the language isn't supported.
	pub fn with_directory<T: Into<PathBuf>>(
		language: Language,
		directory: T
	) -> Result<Self, SetupError>
	{
		let config = LanguageConfig::new(language)?;
		Ok(Self { config, directory: directory.into(), seed: None })
	}

	/// Spin the reels to reproducible starting positions.
	///
	/// # Arguments
	///
	/// * `seed` - The seed for the starting positions.
	#[inline]
	pub fn with_seed(mut self, seed: Option<u64>) -> Self
	{
		self.seed = seed;
		self
	}

	/// The resource directory.
	#[inline]
	#[must_use]
	pub fn directory(&self) -> &Path { &self.directory }

	/// Load the dictionary, preferring the binary cache when it is fresh and
	/// (re)writing it otherwise.
	///
	/// # Errors
	///
	/// [`SetupError::Io`] if the word list cannot be read.
	pub fn load_dictionary(&self) -> Result<Dictionary, SetupError>
	{
		let name = self.config.words_name();
		debug!("Initializing words for file: {}.txt", name);
		let start = Instant::now();
		let dictionary =
			Dictionary::open(&self.directory, name, &self.config.validator())
				.map_err(|e| SetupError::io(
					self.directory.join(format!("{}.txt", name)),
					e
				))?;
		info!(
			"Words dictionary initialized successfully: {} nodes ({:?})",
			dictionary.count(),
			start.elapsed()
		);
		Ok(dictionary)
	}

	/// Load the reels and spin each to its starting position.
	///
	/// # Errors
	///
	/// * [`SetupError::Io`] if the file cannot be read.
	/// * [`SetupError::MalformedReels`] if the rows are ragged.
	/// * [`SetupError::NoReels`] if the file has no rows.
	pub fn load_reels(&self) -> Result<Vec<Reel>, SetupError>
	{
		let path = self.directory.join(self.config.reels_file());
		debug!("Initializing reels for file: {}", path.display());
		let start = Instant::now();
		let file = File::open(&path).map_err(|e| SetupError::io(&path, e))?;
		let mut reels = parse_reels(BufReader::new(file), &path)?;
		let mut rng = match self.seed
		{
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_rng(&mut rand::rng())
		};
		for reel in reels.iter_mut()
		{
			reel.shuffle_with_rng(&mut rng);
		}
		info!(
			"Reels initialized successfully: {} reels ({:?})",
			reels.len(),
			start.elapsed()
		);
		Ok(reels)
	}

	/// Load the letter score table.
	///
	/// # Errors
	///
	/// * [`SetupError::Io`] if the file cannot be read.
	/// * [`SetupError::MalformedScore`] if a line cannot be parsed.
	/// * [`SetupError::DuplicateScore`] if a letter is scored twice.
	pub fn load_scores(&self) -> Result<HashMap<char, u32>, SetupError>
	{
		let path = self.directory.join(self.config.scores_file());
		debug!("Initializing scores for file: {}", path.display());
		let start = Instant::now();
		let file = File::open(&path).map_err(|e| SetupError::io(&path, e))?;
		let scores = parse_scores(BufReader::new(file), &path)?;
		info!(
			"Scores table initialized successfully: {} letters ({:?})",
			scores.len(),
			start.elapsed()
		);
		Ok(scores)
	}
}

impl DataLoader for FileDataLoader
{
	fn load(&self) -> Result<ReelWordsData, SetupError>
	{
		// Wait for all three tasks before looking at any of the results.
		let (dictionary, reels, scores) = thread::scope(|s| {
			let dictionary = s.spawn(|| self.load_dictionary());
			let reels = s.spawn(|| self.load_reels());
			let scores = s.spawn(|| self.load_scores());
			(
				join(dictionary, "dictionary"),
				join(reels, "reels"),
				join(scores, "scores")
			)
		});
		let dictionary = dictionary?;
		let mut reels = reels?;
		let scores = scores?;
		for reel in reels.iter_mut()
		{
			reel.assign_scores(&scores).map_err(SetupError::MissingScore)?;
			if let Some(tile) = reel.tiles().find(|tile| tile.score() == 0)
			{
				return Err(SetupError::ZeroScore(tile.letter()))
			}
		}
		Ok(ReelWordsData::new(dictionary, reels, self.config.validator()))
	}
}

/// Join a load task, treating a panic as a failure of that task.
///
/// # Arguments
///
/// * `handle` - The task.
/// * `task` - The name of the task, for reporting.
fn join<T>(
	handle: ScopedJoinHandle<'_, Result<T, SetupError>>,
	task: &'static str
) -> Result<T, SetupError>
{
	handle.join().unwrap_or_else(|_| Err(SetupError::Panicked(task)))
}

/// Find a directory with the given name, searching `start` and then each of
/// its ancestors.
///
/// # Arguments
///
/// * `start` - The directory where the search begins.
/// * `name` - The name of the sought directory.
///
/// # Returns
///
/// The path of the directory, if found.
#[must_use]
pub fn find_directory(start: &Path, name: &str) -> Option<PathBuf>
{
	start.ancestors()
		.map(|dir| dir.join(name))
		.find(|candidate| {
			trace!("looking for resources in: {}", candidate.display());
			candidate.is_dir()
		})
}

////////////////////////////////////////////////////////////////////////////////
//                                  Parsing.                                  //
////////////////////////////////////////////////////////////////////////////////

/// Parse reels from their textual form. Each line is a row, each
/// whitespace-separated token is a column, and the first character of a token
/// is the letter of that column's reel at that row. The first row determines
/// the number of reels. Blank lines are ignored.
///
/// # Arguments
///
/// * `reader` - The source of lines.
/// * `path` - The path of the source, for reporting.
///
/// # Returns
///
/// The reels, unscored and unspun.
///
/// # Errors
///
/// * [`SetupError::Io`] if a line cannot be read.
/// * [`SetupError::MalformedReels`] if the rows are ragged.
/// * [`SetupError::NoReels`] if there are no rows.
pub fn parse_reels<R: BufRead>(
	reader: R,
	path: &Path
) -> Result<Vec<Reel>, SetupError>
{
	let mut columns: Vec<Vec<Tile>> = Vec::new();
	for (index, line) in reader.lines().enumerate()
	{
		let line = line.map_err(|e| SetupError::io(path, e))?;
		let letters = line.split_whitespace()
			.filter_map(|token| token.chars().next())
			.collect::<Vec<_>>();
		if letters.is_empty()
		{
			continue
		}
		if columns.is_empty()
		{
			columns = vec![Vec::new(); letters.len()];
		}
		if letters.len() != columns.len()
		{
			return Err(SetupError::MalformedReels {
				path: path.to_path_buf(),
				line: index + 1,
				expected: columns.len(),
				found: letters.len()
			})
		}
		for (column, letter) in columns.iter_mut().zip(letters)
		{
			column.push(Tile::new(letter));
		}
	}
	let reels = columns.into_iter()
		.filter_map(Reel::new)
		.collect::<Vec<_>>();
	if reels.is_empty()
	{
		return Err(SetupError::NoReels(path.to_path_buf()))
	}
	Ok(reels)
}

/// Parse a letter score table. Each line is a letter, whitespace, and a
/// non-negative integer score. Blank lines are ignored.
///
/// # Arguments
///
/// * `reader` - The source of lines.
/// * `path` - The path of the source, for reporting.
///
/// # Returns
///
/// The score of each letter.
///
/// # Errors
///
/// * [`SetupError::Io`] if a line cannot be read.
/// * [`SetupError::MalformedScore`] if a line cannot be parsed.
/// * [`SetupError::DuplicateScore`] if a letter is scored twice.
pub fn parse_scores<R: BufRead>(
	reader: R,
	path: &Path
) -> Result<HashMap<char, u32>, SetupError>
{
	let mut scores = HashMap::new();
	for (index, line) in reader.lines().enumerate()
	{
		let line = line.map_err(|e| SetupError::io(path, e))?;
		if line.trim().is_empty()
		{
			continue
		}
		let malformed = || SetupError::MalformedScore {
			path: path.to_path_buf(),
			line: index + 1,
			text: line.clone()
		};
		let mut fields = line.split_whitespace();
		let letter = fields.next()
			.and_then(|field| field.chars().next())
			.ok_or_else(malformed)?;
		let score = fields.next()
			.and_then(|field| field.parse::<u32>().ok())
			.ok_or_else(malformed)?;
		if scores.insert(letter, score).is_some()
		{
			return Err(SetupError::DuplicateScore {
				path: path.to_path_buf(),
				line: index + 1,
				letter
			})
		}
	}
	Ok(scores)
}

////////////////////////////////////////////////////////////////////////////////
//                                  Errors.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete enumeration of conditions that prevent the game from
/// starting.
#[derive(Debug)]
pub enum SetupError
{
	/// The requested language isn't supported yet.
	UnsupportedLanguage(Language),

	/// The resource directory could not be found.
	DirectoryNotFound(String),

	/// A resource could not be read.
	Io
	{
		/// The path of the resource.
		path: PathBuf,

		/// The underlying error.
		source: io::Error
	},

	/// A row of the reels has the wrong number of columns.
	MalformedReels
	{
		/// The path of the reels file.
		path: PathBuf,

		/// The 1-based line number of the offending row.
		line: usize,

		/// The number of columns established by the first row.
		expected: usize,

		/// The number of columns in the offending row.
		found: usize
	},

	/// The reels file has no rows.
	NoReels(PathBuf),

	/// A line of the score table could not be parsed.
	MalformedScore
	{
		/// The path of the score table.
		path: PathBuf,

		/// The 1-based line number of the offending line.
		line: usize,

		/// The offending line.
		text: String
	},

	/// A letter is scored more than once.
	DuplicateScore
	{
		/// The path of the score table.
		path: PathBuf,

		/// The 1-based line number of the second score.
		line: usize,

		/// The letter.
		letter: char
	},

	/// A letter on some reel has no score.
	MissingScore(char),

	/// A letter on some reel is worth no points.
	ZeroScore(char),

	/// A load task panicked.
	Panicked(&'static str)
}

impl SetupError
{
	/// Wrap an I/O error with the path of the resource that caused it.
	pub fn io<T: AsRef<Path>>(path: T, source: io::Error) -> Self
	{
		Self::Io { path: path.as_ref().to_path_buf(), source }
	}
}

impl From<UnsupportedLanguage> for SetupError
{
	fn from(e: UnsupportedLanguage) -> Self
	{
		Self::UnsupportedLanguage(e.0)
	}
}

impl Display for SetupError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::UnsupportedLanguage(language) => write!(
				f,
				"language config {} is not yet supported",
				language
			),
			Self::DirectoryNotFound(name) =>
				write!(f, "unable to find {} directory", name),
			Self::Io { path, source } => write!(
				f,
				"there was an exception reading the file '{}': {}",
				path.display(),
				source
			),
			Self::MalformedReels { path, line, expected, found } => write!(
				f,
				"{}:{}: expected {} reels but found {}",
				path.display(),
				line,
				expected,
				found
			),
			Self::NoReels(path) =>
				write!(f, "{}: no reels defined", path.display()),
			Self::MalformedScore { path, line, text } => write!(
				f,
				"{}:{}: expected '<letter> <score>' but found '{}'",
				path.display(),
				line,
				text
			),
			Self::DuplicateScore { path, line, letter } => write!(
				f,
				"{}:{}: letter '{}' is scored more than once",
				path.display(),
				line,
				letter
			),
			Self::MissingScore(letter) =>
				write!(f, "could not find a score for letter '{}'", letter),
			Self::ZeroScore(letter) =>
				write!(f, "letter '{}' is on a reel but scores 0", letter),
			Self::Panicked(task) =>
				write!(f, "the {} load task panicked", task)
		}
	}
}

impl Error for SetupError
{
	fn source(&self) -> Option<&(dyn Error + 'static)>
	{
		match self
		{
			Self::Io { source, .. } => Some(source),
			_ => None
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::{fs, io::Cursor, path::Path};

	use tempfile::{tempdir, TempDir};

	use crate::{
		language::Language,
		loader::{
			find_directory, parse_reels, parse_scores,
			DataLoader, FileDataLoader, SetupError
		},
		tile::Tile
	};

	/// A stand-in path for in-memory sources.
	fn path() -> &'static Path { Path::new("memory") }

	/// A small score table covering `a` through `h`.
	const SCORES: &str = "a 1\nb 3\nc 3\nd 2\ne 1\nf 4\ng 2\nh 4\n";

	/// Populate a resource directory with the given files.
	fn resources(words: &str, reels: &str, scores: &str) -> TempDir
	{
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("american-english-large.txt"), words)
			.unwrap();
		fs::write(dir.path().join("reels.txt"), reels).unwrap();
		fs::write(dir.path().join("scores.txt"), scores).unwrap();
		dir
	}

	/// Ensure that columns become reels, top to bottom.
	#[test]
	fn test_parse_reels()
	{
		let text = "a b c\n\nd e f\ng h i\n";
		let reels = parse_reels(Cursor::new(text), path()).unwrap();
		assert_eq!(reels.len(), 3);
		let columns = reels.iter()
			.map(|reel| reel.tiles().map(Tile::letter).collect::<String>())
			.collect::<Vec<_>>();
		assert_eq!(columns, vec!["adg", "beh", "cfi"]);
	}

	/// Ensure that only the first character of a token matters.
	#[test]
	fn test_parse_reels_tokens()
	{
		let reels = parse_reels(Cursor::new("abc\tdef  ghi\n"), path())
			.unwrap();
		let fronts = reels.iter()
			.map(|reel| reel.peek_front().letter())
			.collect::<String>();
		assert_eq!(fronts, "adg");
	}

	/// Ensure that ragged and empty reels files are refused.
	#[test]
	fn test_parse_reels_malformed()
	{
		match parse_reels(Cursor::new("a b c\nd e\n"), path())
		{
			Err(SetupError::MalformedReels { line, expected, found, .. }) =>
			{
				assert_eq!((line, expected, found), (2, 3, 2));
			},
			other => panic!("unexpected: {:?}", other)
		}
		assert!(matches!(
			parse_reels(Cursor::new("\n  \n"), path()),
			Err(SetupError::NoReels(_))
		));
	}

	/// Ensure that score lines are parsed and malformed lines refused.
	#[test]
	fn test_parse_scores()
	{
		let scores = parse_scores(Cursor::new(SCORES), path()).unwrap();
		assert_eq!(scores.len(), 8);
		assert_eq!(scores[&'b'], 3);
		for text in ["a\n", "a one\n", "a -1\n"]
		{
			assert!(
				matches!(
					parse_scores(Cursor::new(text), path()),
					Err(SetupError::MalformedScore { line: 1, .. })
				),
				"{:?}",
				text
			);
		}
		assert!(matches!(
			parse_scores(Cursor::new("a 1\na 2\n"), path()),
			Err(SetupError::DuplicateScore { line: 2, letter: 'a', .. })
		));
	}

	/// Ensure that a complete resource directory loads, with every tile
	/// scored and invalid words filtered out.
	#[test]
	fn test_load()
	{
		let dir = resources(
			"bad\ncab\nCab\nface\nhe's\nbed\n",
			"a b c\nd e f\ng h a\n",
			SCORES
		);
		let loader = FileDataLoader::with_directory(Language::EnUs, dir.path())
			.unwrap()
			.with_seed(Some(7));
		let data = loader.load().unwrap();
		assert!(data.dictionary().count() > 1);
		assert!(data.dictionary().contains("cab"));
		assert!(!data.dictionary().contains("Cab"));
		assert!(!data.dictionary().contains("he's"));
		assert_eq!(data.reels().len(), 3);
		for reel in data.reels()
		{
			assert_eq!(reel.len(), 3);
			assert!(reel.tiles().all(|tile| tile.score() > 0));
		}
		assert!(data.validator().is_valid("cab"));
	}

	/// Ensure that the same seed yields the same starting positions.
	#[test]
	fn test_load_seeded()
	{
		let dir = resources(
			"bad\n",
			"a b c\nd e f\ng h a\nb c d\n",
			SCORES
		);
		let loader = FileDataLoader::with_directory(Language::EnUs, dir.path())
			.unwrap()
			.with_seed(Some(42));
		let first = loader.load().unwrap();
		let second = loader.load().unwrap();
		assert_eq!(first.reels(), second.reels());
	}

	/// Ensure that a letter without a score fails the whole load.
	#[test]
	fn test_load_missing_score()
	{
		let dir = resources("bad\n", "a b z\n", SCORES);
		let loader = FileDataLoader::with_directory(Language::EnUs, dir.path())
			.unwrap();
		assert!(matches!(loader.load(), Err(SetupError::MissingScore('z'))));
	}

	/// Ensure that a playable letter worth nothing fails the whole load, but
	/// that an unplayable one does not.
	#[test]
	fn test_load_zero_score()
	{
		let dir = resources("bad\n", "a b\n", "a 0\nb 1\n");
		let loader = FileDataLoader::with_directory(Language::EnUs, dir.path())
			.unwrap();
		assert!(matches!(loader.load(), Err(SetupError::ZeroScore('a'))));
		let dir = resources("bad\n", "a b\n", "a 1\nb 1\nz 0\n");
		let loader = FileDataLoader::with_directory(Language::EnUs, dir.path())
			.unwrap();
		assert_eq!(loader.directory(), dir.path());
		assert!(loader.load().is_ok());
	}

	/// Ensure that a missing file fails the whole load and names the file.
	#[test]
	fn test_load_missing_file()
	{
		let dir = resources("bad\n", "a b c\n", SCORES);
		fs::remove_file(dir.path().join("scores.txt")).unwrap();
		let loader = FileDataLoader::with_directory(Language::EnUs, dir.path())
			.unwrap();
		match loader.load()
		{
			Err(error @ SetupError::Io { .. }) =>
				assert!(error.to_string().contains("scores.txt")),
			other => panic!("unexpected: {:?}", other.map(|_| ()))
		}
	}

	/// Ensure that unsupported languages are refused before any loading.
	#[test]
	fn test_unsupported_language()
	{
		let dir = tempdir().unwrap();
		assert!(matches!(
			FileDataLoader::with_directory(Language::PtBr, dir.path()),
			Err(SetupError::UnsupportedLanguage(Language::PtBr))
		));
	}

	/// Ensure that the resource directory is found in an ancestor.
	#[test]
	fn test_find_directory()
	{
		let dir = tempdir().unwrap();
		let resources = dir.path().join("resources");
		let nested = dir.path().join("a").join("b");
		fs::create_dir_all(&resources).unwrap();
		fs::create_dir_all(&nested).unwrap();
		assert_eq!(find_directory(&nested, "resources"), Some(resources));
		assert_eq!(find_directory(&nested, "no-such-directory"), None);
	}
}
