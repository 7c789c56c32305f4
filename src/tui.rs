//! # Text-based user interface (TUI)
//!
//! Terminal setup and teardown for the full-screen game. The terminal enters
//! the alternate screen and raw mode for the duration of the game, and must be
//! restored afterward no matter how the game ends, including by panic.

use std::io;

use ratatui::DefaultTerminal;

////////////////////////////////////////////////////////////////////////////////
//                         Text-based user interface.                         //
////////////////////////////////////////////////////////////////////////////////

/// The text-based user interface (TUI) type.
pub type Tui = DefaultTerminal;

/// Open the text-based user interface (TUI), apply `f` to it, and restore the
/// terminal. Ratatui installs a panic hook that restores the terminal before
/// the panic message is printed, so a panic inside `f` doesn't leave the
/// terminal in raw mode.
///
/// # Arguments
///
/// * `f` - The function to apply to the TUI.
///
/// # Returns
///
/// The result of applying `f` to the TUI.
///
/// # Errors
///
/// Any error that occurs while driving the TUI, or while initializing or
/// restoring the terminal.
pub fn tui<F, T>(f: F) -> io::Result<T>
	where F: FnOnce(&mut Tui) -> io::Result<T>
{
	// Initialization may fail after partially altering the terminal, so
	// restore in every case.
	let result = match ratatui::try_init()
	{
		Ok(mut terminal) => f(&mut terminal),
		Err(e) => Err(e)
	};
	ratatui::try_restore()?;
	result
}
