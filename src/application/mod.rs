//! Application Layer
//!
//! Orchestrates the explorer over domain services.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain explorer rules (those are in Domain)
//! - Owns the per-payload state and the viewport subscription
//!
//! ## Components
//!
//! - `Explorer` - State owner and event handlers (load, search, toggle, window, export, copy)
//! - `ViewportRegistry` - Single resize subscription with explicit teardown

pub mod explorer;
pub mod viewport;

pub use explorer::{Explorer, ExplorerSettings, ExplorerState, ExplorerView};
pub use viewport::{viewport_px, ViewportRegistry, ViewportSubscription};
