//! # Dictionary
//!
//! Herein is support for dictionary construction and manipulation. All runtime
//! operations are performed against a [`Dictionary`], which is a prefix tree
//! of words. Each node of the tree stands for one letter position; a node
//! whose path from the root spells a complete word carries the shared
//! [end-of-word marker](END_OF_WORD).

use std::{
	collections::{hash_map::Entry, HashMap},
	fs::File,
	io::{self, BufRead, BufReader, ErrorKind, Read, Write},
	path::Path
};

use log::{info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::validator::WordValidator;

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// The marker placed beneath a node whose path spells a complete word. It has
/// no children of its own and is never descended into, so one value serves
/// every word in the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndOfWord;

/// The one and only end-of-word marker.
pub const END_OF_WORD: EndOfWord = EndOfWord;

/// A single letter position in the prefix tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Node
{
	/// The children of this node, keyed by their letter.
	children: HashMap<char, Node>,

	/// Present iff the path to this node spells a complete word.
	end_of_word: Option<EndOfWord>
}

impl Node
{
	/// Check whether the node has become useless, i.e., it neither ends a word
	/// nor leads to one.
	#[inline]
	#[must_use]
	fn is_vacant(&self) -> bool
	{
		self.children.is_empty() && self.end_of_word.is_none()
	}
}

/// A dictionary is a prefix tree of words. The root stands for the empty
/// prefix and is never removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Dictionary
{
	/// The root of the prefix tree.
	root: Node,

	/// The number of nodes in the tree, including the root but excluding the
	/// end-of-word markers.
	count: usize
}

impl Default for Dictionary
{
	fn default() -> Self
	{
		Self { root: Node::default(), count: 1 }
	}
}

impl Dictionary
{
	/// Construct an empty dictionary. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty dictionary.
	#[inline]
	pub fn new() -> Self { Self::default() }

	/// Check if the dictionary is empty.
	///
	/// # Returns
	///
	/// `true` if the dictionary is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.root.children.is_empty() }

	/// Answer the number of nodes in the prefix tree. The root counts, so an
	/// empty dictionary answers `1`.
	#[inline]
	#[must_use]
	pub fn count(&self) -> usize { self.count }

	/// Insert a word into the dictionary, creating a node for every letter
	/// not already present along its path. Inserting a word twice has no
	/// further effect. The empty string is never a word, so inserting it does
	/// nothing.
	///
	/// # Arguments
	///
	/// * `word` - The word to insert.
	pub fn insert(&mut self, word: &str)
	{
		if word.is_empty()
		{
			return
		}
		let mut node = &mut self.root;
		for c in word.chars()
		{
			node = match node.children.entry(c)
			{
				Entry::Occupied(entry) => entry.into_mut(),
				Entry::Vacant(entry) =>
				{
					self.count += 1;
					entry.insert(Node::default())
				}
			};
		}
		node.end_of_word = Some(END_OF_WORD);
	}

	/// Check if the dictionary contains the given word. The empty string is
	/// never contained.
	///
	/// # Arguments
	///
	/// * `word` - The word to check.
	///
	/// # Returns
	///
	/// `true` if the dictionary contains the word, `false` otherwise.
	#[must_use]
	pub fn contains(&self, word: &str) -> bool
	{
		if word.is_empty()
		{
			return false
		}
		let mut node = &self.root;
		for c in word.chars()
		{
			match node.children.get(&c)
			{
				Some(child) => node = child,
				None => return false
			}
		}
		node.end_of_word.is_some()
	}

	/// Delete a word from the dictionary. Nodes that no longer lead to any
	/// word are pruned, from the end of the word back toward the root; nodes
	/// shared with other words survive. Deleting an absent word does nothing.
	///
	/// # Arguments
	///
	/// * `word` - The word to delete.
	pub fn delete(&mut self, word: &str)
	{
		if word.is_empty()
		{
			return
		}
		let letters = word.chars().collect::<Vec<_>>();
		let pruned = Self::delete_below(&mut self.root, &letters);
		trace!("deleted {}: pruned {} nodes", word, pruned);
		self.count -= pruned;
	}

	/// Delete the given suffix below `node`, pruning vacated descendants.
	///
	/// # Returns
	///
	/// The number of nodes pruned.
	fn delete_below(node: &mut Node, suffix: &[char]) -> usize
	{
		match suffix.split_first()
		{
			None =>
			{
				node.end_of_word = None;
				0
			},
			Some((c, rest)) =>
			{
				let Some(child) = node.children.get_mut(c) else { return 0 };
				let pruned = Self::delete_below(child, rest);
				if child.is_vacant()
				{
					node.children.remove(c);
					pruned + 1
				}
				else
				{
					pruned
				}
			}
		}
	}

	/// Populate the dictionary with the given words, without validation.
	///
	/// # Arguments
	///
	/// * `words` - The intended content of the dictionary.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T])
	{
		for word in words
		{
			self.insert(word.as_ref());
		}
	}

	/// Populate the dictionary from a source of lines, one word per line.
	/// Lines rejected by the validator are skipped.
	///
	/// # Arguments
	///
	/// * `reader` - The source of lines.
	/// * `validator` - The validator that admits words.
	///
	/// # Returns
	///
	/// The number of valid and invalid lines, respectively.
	///
	/// # Errors
	///
	/// If a line cannot be read, an error is returned.
	pub fn populate_from<R: BufRead>(
		&mut self,
		reader: R,
		validator: &WordValidator
	) -> Result<(usize, usize), io::Error>
	{
		let mut valid = 0;
		let mut invalid = 0;
		for line in reader.lines()
		{
			let word = line?;
			if validator.is_valid(&word)
			{
				self.insert(&word);
				valid += 1;
			}
			else
			{
				invalid += 1;
			}
		}
		Ok((valid, invalid))
	}

	/// Open a dictionary with the given name. Only the specified directory will
	/// be searched. `name` denotes the dictionary file, sans the extension. If
	/// a binary dictionary (`<name>.dict`) exists _and_ is newer than the text
	/// file (`<name>.txt`), it will be read; otherwise, a text file will be
	/// read through the validator and a binary dictionary will be created (to
	/// optimize future reads).
	///
	/// # Arguments
	///
	/// * `dir` - The directory to search.
	/// * `name` - The name of the dictionary file.
	/// * `validator` - The validator that admits words from the text file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn open<T: AsRef<Path>>(
		dir: T,
		name: &str,
		validator: &WordValidator
	) -> Result<Self, io::Error>
	{
		let dict_path = dir.as_ref().join(format!("{}.dict", name));
		let txt_path = dir.as_ref().join(format!("{}.txt", name));
		// Use the binary dictionary only if it's newer than the text
		// dictionary. Any failure along the way (including a missing binary
		// file) means falling back to the text file.
		if dict_path
			.metadata()
			.and_then(|m| m.modified())
			.and_then(|dict_time| {
				txt_path
					.metadata()
					.and_then(|n| n.modified())
					.map(|txt_time| dict_time > txt_time)
			})
			.unwrap_or(false)
		{
			let dictionary = Self::deserialize_from_file(&dict_path)?;
			trace!("Read binary dictionary: {}", dict_path.display());
			Ok(dictionary)
		}
		else
		{
			let dictionary = Self::read_from_file(&txt_path, validator)?;
			trace!("Read text dictionary: {}", txt_path.display());
			match dictionary.serialize_to_file(&dict_path)
			{
				Ok(_) =>
				{
					trace!("Wrote binary dictionary: {}", dict_path.display())
				},
				Err(e) => warn!(
					"Failed to write binary dictionary: {}: {}",
					dict_path.display(),
					e
				)
			}
			Ok(dictionary)
		}
	}

	/// Construct a dictionary from the contents of the given file. Each line
	/// in the file is considered a single word, and only lines admitted by the
	/// validator are inserted.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	/// * `validator` - The validator that admits words.
	///
	/// # Returns
	///
	/// A dictionary containing the valid words from the file.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(
		path: T,
		validator: &WordValidator
	) -> Result<Self, io::Error>
	{
		let file = File::open(&path)?;
		let reader = BufReader::new(file);
		let mut dictionary = Self::new();
		let (valid, invalid) = dictionary.populate_from(reader, validator)?;
		info!(
			"Found a total of {} words in {}. Valid: {}. Invalid: {}. \
				Number of nodes: {}",
			valid + invalid,
			path.as_ref().display(),
			valid,
			invalid,
			dictionary.count
		);
		Ok(dictionary)
	}

	/// Deserialize a dictionary from the given file. The file must contain a
	/// serialized dictionary in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary deserialized from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let mut reader = BufReader::new(file);
		let mut content = Vec::new();
		reader.read_to_end(&mut content)?;
		let dictionary = bincode::deserialize(&content)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
		Ok(dictionary)
	}

	/// Serialize the dictionary to the given file. The dictionary is serialized
	/// in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or written, an error is returned.
	/// * If the dictionary cannot be encoded, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let mut file = File::create(path)?;
		let content = bincode::serialize(self)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
		file.write_all(&content)?;
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::{fs, io::Cursor};

	use crate::{
		dictionary::Dictionary,
		validator::{WordValidator, LOWERCASE_LATIN}
	};
	use tempfile::{tempdir, NamedTempFile};

	/// The path to the dictionary file.
	#[inline]
	#[must_use]
	const fn test_path() -> &'static str
	{
		"resources/american-english-large.txt"
	}

	/// Answer a validator for the lowercase Latin alphabet.
	fn latin() -> WordValidator
	{
		WordValidator::new(vec![LOWERCASE_LATIN])
	}

	/// Words that share prefixes with each other.
	const WORDS: [&str; 5] = ["can", "carts", "cart", "cats", "card"];

	/// Test basic functionality of [`Dictionary`]:
	///
	/// * [`Dictionary::new`]
	/// * [`Dictionary::is_empty`]
	/// * [`Dictionary::populate`]
	/// * [`Dictionary::contains`]
	#[test]
	fn test_populate()
	{
		let mut dictionary = Dictionary::new();
		assert!(dictionary.is_empty());
		assert_eq!(dictionary.count(), 1);
		assert!(!dictionary.contains("hello"));
		assert!(!dictionary.contains("world"));
		dictionary.populate(&["hello", "world"]);
		assert!(!dictionary.is_empty());
		assert!(dictionary.contains("hello"));
		assert!(dictionary.contains("world"));
		assert!(!dictionary.contains("hell"));
		assert!(!dictionary.contains("worlds"));
	}

	/// Ensure that a single word costs one node per letter, plus the root, and
	/// that deleting it restores the empty tree.
	#[test]
	fn test_single_word()
	{
		let mut dictionary = Dictionary::new();
		dictionary.insert("parallel");
		assert!(dictionary.contains("parallel"));
		assert_eq!(dictionary.count(), "parallel".len() + 1);
		dictionary.insert("parallel");
		assert_eq!(dictionary.count(), "parallel".len() + 1);
		dictionary.delete("parallel");
		assert!(!dictionary.contains("parallel"));
		assert_eq!(dictionary.count(), 1);
		assert!(dictionary.is_empty());
	}

	/// Ensure that words sharing prefixes share nodes, and that deleting every
	/// word prunes the tree back to the root.
	#[test]
	fn test_multiple_words()
	{
		let mut dictionary = Dictionary::new();
		for word in WORDS
		{
			dictionary.insert(word);
			assert!(dictionary.contains(word));
		}
		// ^ c a n r t s t s d
		assert_eq!(dictionary.count(), 10);
		for word in WORDS
		{
			dictionary.delete(word);
			assert!(!dictionary.contains(word), "{}", word);
		}
		assert_eq!(dictionary.count(), 1);
	}

	/// Ensure that deleting a word leaves words with a shared prefix intact.
	#[test]
	fn test_delete_shared_prefix()
	{
		let mut dictionary = Dictionary::new();
		dictionary.populate(&["cart", "cat"]);
		assert_eq!(dictionary.count(), 6);
		dictionary.delete("cart");
		assert!(!dictionary.contains("cart"));
		assert!(dictionary.contains("cat"));
		assert_eq!(dictionary.count(), 4);

		// A word that is a prefix of another keeps the longer word alive, and
		// vice versa.
		let mut dictionary = Dictionary::new();
		dictionary.populate(&["cart", "carts"]);
		dictionary.delete("cart");
		assert!(dictionary.contains("carts"));
		assert_eq!(dictionary.count(), 6);
		dictionary.insert("cart");
		dictionary.delete("carts");
		assert!(dictionary.contains("cart"));
		assert_eq!(dictionary.count(), 5);
	}

	/// Ensure that deleting absent words changes nothing.
	#[test]
	fn test_delete_absent()
	{
		let mut dictionary = Dictionary::new();
		dictionary.populate(&["cart"]);
		let before = dictionary.clone();
		dictionary.delete("car");
		dictionary.delete("carts");
		dictionary.delete("dog");
		dictionary.delete("");
		assert_eq!(dictionary, before);
		assert!(dictionary.contains("cart"));
	}

	/// Ensure that the empty string is never a word.
	#[test]
	fn test_empty_string()
	{
		let mut dictionary = Dictionary::new();
		assert!(!dictionary.contains(""));
		dictionary.insert("");
		assert!(!dictionary.contains(""));
		assert_eq!(dictionary.count(), 1);
		dictionary.insert("as");
		assert!(!dictionary.contains(""));
	}

	/// Ensure that population from lines honors the validator.
	#[test]
	fn test_populate_from()
	{
		let lines = "program\nProgram\nprogram's\na\nzebra\n\npr0gram\n";
		let mut dictionary = Dictionary::new();
		let (valid, invalid) = dictionary
			.populate_from(Cursor::new(lines), &latin())
			.unwrap();
		assert_eq!((valid, invalid), (2, 5));
		assert!(dictionary.contains("program"));
		assert!(dictionary.contains("zebra"));
		assert!(!dictionary.contains("Program"));
		assert!(!dictionary.contains("a"));
	}

	/// Test reading a dictionary from a file:
	///
	/// * [`Dictionary::read_from_file`]
	#[test]
	fn test_read_from_file()
	{
		let dictionary =
			Dictionary::read_from_file(test_path(), &latin()).unwrap();
		assert!(!dictionary.is_empty());
		assert!(dictionary.count() > 1);
		assert!(dictionary.contains("program"));
		assert!(dictionary.contains("zebra"));
	}

	/// Test serializing and deserializing a dictionary:
	///
	/// * [`Dictionary::serialize_to_file`]
	/// * [`Dictionary::deserialize_from_file`]
	#[test]
	fn test_serialize_to_file()
	{
		let mut dictionary = Dictionary::new();
		dictionary.populate(&WORDS);
		let file = NamedTempFile::new().unwrap();
		dictionary.serialize_to_file(file.path()).unwrap();
		let deserialized =
			Dictionary::deserialize_from_file(file.path()).unwrap();
		assert_eq!(dictionary, deserialized);
		assert_eq!(deserialized.count(), 10);
	}

	/// Ensure that opening a dictionary writes the binary cache, and that the
	/// cache is subsequently preferred.
	#[test]
	fn test_open()
	{
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("words.txt"), "cart\ncat\nCat\n").unwrap();
		let dictionary = Dictionary::open(dir.path(), "words", &latin())
			.unwrap();
		assert!(dictionary.contains("cart"));
		assert!(dictionary.contains("cat"));
		let cache = dir.path().join("words.dict");
		assert!(cache.exists());
		let cached = Dictionary::deserialize_from_file(&cache).unwrap();
		assert_eq!(dictionary, cached);
		let reopened = Dictionary::open(dir.path(), "words", &latin())
			.unwrap();
		assert_eq!(dictionary, reopened);
	}

	/// Ensure that a missing text file is reported.
	#[test]
	fn test_open_missing()
	{
		let dir = tempdir().unwrap();
		assert!(Dictionary::open(dir.path(), "missing", &latin()).is_err());
	}
}
