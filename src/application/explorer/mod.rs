//! Explorer Module
//!
//! The state owner for one explorer instance.
//!
//! ## Structure
//!
//! - `options` - Settings (`ExplorerSettings`)
//! - `state` - Per-payload state (`ExplorerState`)
//! - `view` - Render output (`ExplorerView`)
//! - `session` - Event handlers (`Explorer`)
//!
//! ## Usage
//!
//! ```ignore
//! use treelens::application::explorer::{Explorer, ExplorerSettings};
//!
//! let mut explorer = Explorer::new(ExplorerSettings::default(), labels);
//! explorer.load(envelope);
//! explorer.set_search("bob");
//! let view = explorer.view();
//! ```

mod options;
mod session;
mod state;
mod view;

pub use options::{ExplorerSettings, INITIAL_CHUNK};
pub use session::Explorer;
pub use state::ExplorerState;
pub use view::ExplorerView;
