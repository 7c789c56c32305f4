//! # Views
//!
//! A view is where the game writes its messages and reads the player's
//! input, one line at a time.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented input and output for the game.
pub trait View
{
	/// Write text without a line terminator, flushing so that prompts are
	/// visible before input is read.
	///
	/// # Errors
	///
	/// Any error that occurs while writing.
	fn display_text(&mut self, text: &str) -> io::Result<()>;

	/// Write a line of text.
	///
	/// # Errors
	///
	/// Any error that occurs while writing.
	fn display_text_line(&mut self, text: &str) -> io::Result<()>;

	/// Read a line of text, without its line terminator.
	///
	/// # Returns
	///
	/// The line, or `None` at the end of the input.
	///
	/// # Errors
	///
	/// Any error that occurs while reading.
	fn read_text_line(&mut self) -> io::Result<Option<String>>;
}

/// A [`View`] over an arbitrary reader and writer.
#[derive(Debug)]
pub struct ConsoleView<R, W>
{
	/// The source of input.
	input: R,

	/// The sink of output.
	output: W
}

impl<R: BufRead, W: Write> ConsoleView<R, W>
{
	/// Construct a view over the given reader and writer.
	pub fn new(input: R, output: W) -> Self
	{
		Self { input, output }
	}

	/// Take the view apart.
	pub fn into_parts(self) -> (R, W)
	{
		(self.input, self.output)
	}
}

impl ConsoleView<StdinLock<'static>, Stdout>
{
	/// Construct a view over the standard input and output.
	pub fn stdio() -> Self
	{
		Self::new(io::stdin().lock(), io::stdout())
	}
}

impl<R: BufRead, W: Write> View for ConsoleView<R, W>
{
	fn display_text(&mut self, text: &str) -> io::Result<()>
	{
		write!(self.output, "{}", text)?;
		self.output.flush()
	}

	fn display_text_line(&mut self, text: &str) -> io::Result<()>
	{
		writeln!(self.output, "{}", text)
	}

	fn read_text_line(&mut self) -> io::Result<Option<String>>
	{
		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0
		{
			return Ok(None)
		}
		let trimmed = line.trim_end_matches(['\n', '\r']).len();
		line.truncate(trimmed);
		Ok(Some(line))
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::io::Cursor;

	use crate::view::{ConsoleView, View};

	/// Ensure that lines are read without their terminators, that interior
	/// whitespace survives, and that the end of input is reported.
	#[test]
	fn test_read_text_line()
	{
		let input = Cursor::new(" cat\r\ndog\n\nlast");
		let mut view = ConsoleView::new(input, Vec::new());
		assert_eq!(view.read_text_line().unwrap(), Some(" cat".to_string()));
		assert_eq!(view.read_text_line().unwrap(), Some("dog".to_string()));
		assert_eq!(view.read_text_line().unwrap(), Some(String::new()));
		assert_eq!(view.read_text_line().unwrap(), Some("last".to_string()));
		assert_eq!(view.read_text_line().unwrap(), None);
	}

	/// Ensure that output is captured as written.
	#[test]
	fn test_display()
	{
		let mut view = ConsoleView::new(Cursor::new(""), Vec::new());
		view.display_text("> ").unwrap();
		view.display_text_line("hello").unwrap();
		let (_, output) = view.into_parts();
		assert_eq!(String::from_utf8(output).unwrap(), "> hello\n");
	}
}
