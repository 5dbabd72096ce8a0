//! Terminal presentation for the `skills` binary
//!
//! - `primitives` / `widgets` / `blocks` / `components` - building blocks
//! - `views` - one renderer per command result
//! - `sink` - `SyncEventSink` implementations (console, NDJSON)
//! - `menu` - interactive preset picker

pub mod blocks;
pub mod components;
pub mod context;
pub mod error;
pub mod json;
pub mod menu;
pub mod output;
pub mod primitives;
pub mod sink;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
