//! Terminal presentation for the `treelens` binary.

pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod theme;
pub mod views;
pub mod widgets;
