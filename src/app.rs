//! # Application
//!
//! The application state and logic of the text-based user interface (TUI).
//! The player types a word beneath the rack and presses Enter to play it; the
//! outcome of every turn is listed beside the rack, together with the running
//! score.

use std::{io, mem::take};

use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
	buffer::Buffer,
	layout::{Alignment, Constraint, Direction, Layout, Rect},
	style::{Color, Style, Stylize},
	text::Line,
	widgets::{
		Block, BorderType, Borders, List, ListItem, Paragraph, Widget, Wrap
	},
	Frame
};
use reel_words::game::{Command, Game, Turn};

use crate::tui::Tui;

/// The longest word that the player can type.
const MAX_INPUT: usize = 24;

////////////////////////////////////////////////////////////////////////////////
//                                Application.                                //
////////////////////////////////////////////////////////////////////////////////

/// The application state.
#[must_use]
pub struct App
{
	/// Whether the application is running.
	state: ExecutionState,

	/// The game session.
	game: Game,

	/// The word being typed.
	input: String,

	/// The outcome of every turn, oldest first.
	history: Vec<Turn>
}

// Public interface.
impl App
{
	/// Create a new application state.
	///
	/// # Arguments
	///
	/// * `game` - The game session to play.
	///
	/// # Returns
	///
	/// The new application state.
	#[inline]
	pub fn new(game: Game) -> Self
	{
		Self {
			state: ExecutionState::Playing,
			game,
			input: String::new(),
			history: Vec::new()
		}
	}

	/// Run the application until the player quits.
	///
	/// # Arguments
	///
	/// * `tui` - The text-based user interface (TUI).
	///
	/// # Returns
	///
	/// The final score.
	///
	/// # Errors
	///
	/// Any error that occurs while running the application.
	pub fn run(mut self, tui: &mut Tui) -> io::Result<u32>
	{
		while self.is_running()
		{
			tui.draw(|frame| self.render_frame(frame))?;
			self.process_event()?;
		}
		Ok(self.game.score())
	}

	/// Check if the application is running.
	///
	/// # Returns
	///
	/// `true` if the application is running, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_running(&self) -> bool
	{
		!matches!(self.state, ExecutionState::Exiting)
	}
}

// Private implementation details.
impl App
{
	/// Append the given character to the word being typed. If the word is
	/// already at its maximum length, do nothing.
	///
	/// # Arguments
	///
	/// * `c` - The character to append.
	fn append(&mut self, c: char)
	{
		if self.input.chars().count() < MAX_INPUT
		{
			self.input.push(c);
		}
	}

	/// Delete the last character of the word being typed.
	fn delete(&mut self)
	{
		self.input.pop();
	}

	/// Clear the word being typed.
	fn clear(&mut self)
	{
		self.input.clear();
	}

	/// Play the word being typed, recording the outcome. Typing the quit
	/// command ends the game, just as on the console.
	fn submit(&mut self)
	{
		let input = take(&mut self.input);
		if input.is_empty()
		{
			return
		}
		match Command::parse(&input)
		{
			Command::Quit => self.exit(),
			Command::Word(word) =>
			{
				let turn = self.game.play(word);
				self.history.push(turn);
			}
		}
	}

	/// Mark the application for exit. The application will exit after the next
	/// iteration of the main loop.
	fn exit(&mut self)
	{
		self.state = ExecutionState::Exiting;
	}

	/// Render the application frame.
	///
	/// # Arguments
	///
	/// * `frame` - The target frame.
	fn render_frame(&self, frame: &mut Frame)
	{
		frame.render_widget(self, frame.area());
	}

	/// Render the rack, the word being typed, and the outcome of the last
	/// turn.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_board(&self, area: Rect, buf: &mut Buffer)
	{
		Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(Color::White))
			.title(Line::from("Rack").centered())
			.title(Line::from("⎋ – exit".yellow().bold()).left_aligned())
			.title(Line::from("↵ – play".green().bold()).right_aligned())
			.title_bottom(
				Line::from("A-Z - edit ⌫ - delete ⌦ - clear".cyan())
					.centered()
			)
			.render(area, buf);
		let board = Layout::default()
			.direction(Direction::Vertical)
			.margin(3)
			.constraints([
				Constraint::Ratio(1, 3),
				Constraint::Length(3),
				Constraint::Length(1),
				Constraint::Length(3),
				Constraint::Length(2),
				Constraint::Ratio(1, 3)
			])
			.split(area);
		// Lay out the tiles in a single row, one cell per reel.
		let tiles = self.game.rack().tiles();
		let row = Layout::default()
			.direction(Direction::Horizontal)
			.constraints(vec![Constraint::Min(6); tiles.len()])
			.split(board[1]);
		for (tile, cell) in tiles.iter().zip(row.iter())
		{
			Paragraph::new(tile.to_string())
				.block(
					Block::new()
						.border_type(BorderType::Rounded)
						.borders(Borders::ALL)
						.border_style(Style::default().fg(Color::White))
				)
				.alignment(Alignment::Center)
				.render(*cell, buf);
		}
		// The word being typed.
		Paragraph::new(self.input.as_str())
			.block(
				Block::new()
					.border_type(BorderType::Rounded)
					.borders(Borders::ALL)
					.border_style(Style::default().fg(Color::Cyan))
			)
			.alignment(Alignment::Left)
			.style(Style::default().fg(Color::Black).bg(Color::Cyan))
			.render(board[3], buf);
		// The outcome of the last turn.
		if let Some(turn) = self.history.last()
		{
			Paragraph::new(turn.to_string())
				.style(Style::default().fg(turn_color(turn)))
				.alignment(Alignment::Center)
				.wrap(Wrap { trim: true })
				.render(board[4], buf);
		}
	}

	/// Render the history of turns, most recent first, titled with the running
	/// score.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_history(&self, area: Rect, buf: &mut Buffer)
	{
		let items = self.history.iter().rev()
			.map(|turn| {
				let label = match turn
				{
					Turn::Accepted { word, points, .. } =>
						format!("{} +{}", word, points),
					Turn::Invalid(word) => format!("{} (invalid)", word),
					Turn::NotInDictionary(word) =>
						format!("{} (unknown)", word),
					Turn::NotOnRack(word) => format!("{} (not on rack)", word)
				};
				ListItem::new(label)
					.style(Style::default().fg(turn_color(turn)))
			})
			.collect::<Vec<_>>();
		let list = List::new(items)
			.block(
				Block::default()
					.title(format!("Score: {}", self.game.score()))
					.title_alignment(Alignment::Center)
					.borders(Borders::ALL)
			);
		Widget::render(list, area, buf);
	}

	/// Process events, blocking until one arrives.
	///
	/// # Errors
	///
	/// Any error that occurs while processing events.
	fn process_event(&mut self) -> io::Result<()>
	{
		match read()?
		{
			Event::Key(event) if event.kind == KeyEventKind::Press =>
				self.process_key_event(event),
			_ => {}
		}
		Ok(())
	}

	/// Process a key event:
	///
	/// * Escape - Exit the application.
	/// * Enter - Play the word being typed.
	/// * Backspace - Delete the last character of the word.
	/// * Delete - Clear the word.
	/// * Anything printable - Append the character to the word.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event(&mut self, event: KeyEvent)
	{
		if !self.is_running()
		{
			return
		}
		match event.code
		{
			KeyCode::Esc => self.exit(),
			KeyCode::Enter => self.submit(),
			KeyCode::Backspace => self.delete(),
			KeyCode::Delete => self.clear(),
			KeyCode::Char(c) if !c.is_control() => self.append(c),
			_ => {}
		}
	}
}

impl Widget for &App
{
	fn render(self, area: Rect, buf: &mut Buffer)
	{
		if let ExecutionState::Exiting = self.state
		{
			return
		}
		// Split the screen into two parts: the board and the history.
		let outer = Layout::default()
			.direction(Direction::Horizontal)
			.margin(1)
			.constraints([
				Constraint::Percentage(100),
				Constraint::Min(32)
			])
			.split(area);
		self.render_board(outer[0], buf);
		self.render_history(outer[1], buf);
	}
}

/// Answer the color that signifies the outcome of a turn.
#[inline]
#[must_use]
fn turn_color(turn: &Turn) -> Color
{
	if turn.is_accepted() { Color::Green } else { Color::Red }
}

/// The execution state of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExecutionState
{
	/// The player is playing.
	Playing,

	/// The application is exiting.
	Exiting
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
