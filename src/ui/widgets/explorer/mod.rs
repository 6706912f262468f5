//! Interactive full-screen explorer.
//!
//! ## Structure
//!
//! - `input` - Key to action mapping
//! - `screen` - Cursor, scrolling, search line and frame rendering
//!
//! The loop below owns the terminal: raw mode plus the alternate screen,
//! restored by [`TerminalGuard`] on every exit path. The viewport
//! subscription is torn down on every exit path as well.

mod input;
mod screen;

pub use input::{key_to_action, key_to_search_edit, ExplorerAction, SearchEdit};
pub use screen::{ExplorerScreen, Flow, CHROME_LINES};

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, ClearType},
};

use treelens::application::{viewport_px, ViewportSubscription};
use treelens::domain::entities::SchemaNode;
use treelens::domain::ports::Clipboard;
use treelens::infrastructure::PayloadWatcher;

const TICK: Duration = Duration::from_millis(150);

/// Restores the terminal when dropped
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Source of payload reloads for the loop
pub struct Reloader {
    pub watcher: PayloadWatcher,
    /// Schema given on the command line, re-attached to every reload
    pub schema: Option<SchemaNode>,
}

fn draw(out: &mut impl Write, screen: &mut ExplorerScreen, (width, height): (u16, u16)) -> io::Result<()> {
    let height = usize::from(height);
    screen.scroll_to_cursor(height.saturating_sub(CHROME_LINES));

    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    for line in screen.frame(usize::from(width), height) {
        write!(out, "{}\r\n", line)?;
    }
    out.flush()
}

/// Run the explorer until the user quits
pub fn run_interactive(
    screen: &mut ExplorerScreen,
    reloader: Option<Reloader>,
    clipboard: &dyn Clipboard,
    row_height_px: u32,
) -> io::Result<()> {
    let size = terminal::size()?;
    let subscription = screen
        .explorer_mut()
        .subscribe_viewport(viewport_px(size.1, row_height_px));

    let result = TerminalGuard::enter().and_then(|_guard| {
        event_loop(screen, reloader, clipboard, row_height_px, &subscription, size)
    });

    screen.explorer_mut().unsubscribe_viewport(subscription);
    result
}

fn event_loop(
    screen: &mut ExplorerScreen,
    mut reloader: Option<Reloader>,
    clipboard: &dyn Clipboard,
    row_height_px: u32,
    subscription: &ViewportSubscription,
    mut size: (u16, u16),
) -> io::Result<()> {
    let mut stdout = io::stdout();
    draw(&mut stdout, screen, size)?;

    loop {
        let mut dirty = false;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if screen.is_editing() {
                        if let Some(edit) = key_to_search_edit(key) {
                            screen.edit_search(edit);
                            dirty = true;
                        }
                    } else if let Some(action) = key_to_action(key) {
                        let page = usize::from(size.1).saturating_sub(CHROME_LINES);
                        if screen.handle(action, page, clipboard) == Flow::Quit {
                            return Ok(());
                        }
                        dirty = true;
                    }
                }
                Event::Resize(columns, rows) => {
                    size = (columns, rows);
                    screen
                        .explorer_mut()
                        .on_viewport_resize(subscription, viewport_px(rows, row_height_px));
                    dirty = true;
                }
                _ => {}
            }
        }

        if let Some(reloader) = reloader.as_mut() {
            if let Some(envelope) = reloader.watcher.poll(Duration::ZERO) {
                let envelope = envelope.with_schema(reloader.schema.clone());
                screen.reload(envelope);
                dirty = true;
            }
        }

        if dirty {
            draw(&mut stdout, screen, size)?;
        }
    }
}
