//! Keyboard input handling and interactive loop.
//!
//! This module provides functions for mapping keyboard events to tree actions
//! and running the interactive terminal loop.

use crossterm::event::KeyEvent;

use super::menu::{MenuShortcut, TreeAction, TreeMenu};

/// Convert a keyboard event to a TreeAction.
///
/// While searching, printable characters extend the query, so navigation
/// falls back to the arrow keys and Tab toggles. Shortcut keys only apply
/// outside search and never shadow a built-in binding.
pub fn key_to_action(
    key: KeyEvent,
    searching: bool,
    shortcuts: &[MenuShortcut],
) -> Option<TreeAction> {
    use crossterm::event::KeyCode;

    if searching {
        return match key.code {
            KeyCode::Up => Some(TreeAction::Up),
            KeyCode::Down => Some(TreeAction::Down),
            KeyCode::Tab => Some(TreeAction::Toggle),
            KeyCode::Enter => Some(TreeAction::Confirm),
            KeyCode::Backspace => Some(TreeAction::SearchBackspace),
            KeyCode::Esc => Some(TreeAction::ClearSearch),
            KeyCode::Char(c) => Some(TreeAction::SearchInput(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') | KeyCode::Tab => Some(TreeAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('n') => Some(TreeAction::SelectNone),
        KeyCode::Char('/') => Some(TreeAction::StartSearch),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        KeyCode::Char(c) => shortcuts
            .iter()
            .position(|s| s.key == c)
            .map(TreeAction::Shortcut),
        _ => None,
    }
}

/// Whether `c` is already bound outside search mode
pub fn is_reserved_key(c: char) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    key_to_action(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), false, &[]).is_some()
}

/// Run the tree menu interactively.
/// Returns the form value if confirmed, None if quit.
pub fn run_interactive(
    menu: &mut TreeMenu,
    supports_unicode: bool,
) -> std::io::Result<Option<String>> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };
    use std::io::{stdout, Write};

    // Enable raw mode
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();

    // Helper to render the full UI
    let render_ui = |stdout: &mut std::io::Stdout, menu: &TreeMenu| -> std::io::Result<()> {
        // Clear entire screen and move to top
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let rendered = menu.render(supports_unicode);
        for line in rendered.lines() {
            write!(stdout, "{}\r\n", line)?;
        }

        write!(stdout, "{}\r\n", "─".repeat(63))?;

        let status = menu.render_status_bar(supports_unicode);
        for line in status.lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        write!(stdout, "\r\n")?;

        let help = menu.render_help_bar();
        for line in help.lines() {
            write!(stdout, "{}\r\n", line)?;
        }

        stdout.flush()?;
        Ok(())
    };

    // Hide cursor
    execute!(stdout, cursor::Hide)?;

    let result = (|| -> std::io::Result<Option<String>> {
        render_ui(&mut stdout, menu)?;

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let Some(action) = key_to_action(key, menu.is_searching(), menu.shortcuts()) else {
                continue;
            };
            match action {
                TreeAction::Confirm => return Ok(Some(menu.form_value())),
                TreeAction::Quit => return Ok(None),
                _ => {
                    menu.handle_action(action);
                    render_ui(&mut stdout, menu)?;
                }
            }
        }
    })();

    // Restore terminal even when the loop failed
    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    result
}
