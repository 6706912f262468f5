//! Domain Value Objects
//!
//! Immutable value types shared by the explorer services.

mod config_warning;
mod hash;
mod path;
mod value_class;
mod view_mode;

pub use config_warning::ConfigWarning;
pub use hash::ContentHash;
pub use path::{Address, NodePath, PathToken, ADDRESS_SEPARATOR, ROOT_TOKEN};
pub use value_class::ValueClass;
pub use view_mode::ViewMode;
