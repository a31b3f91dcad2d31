//! # UI Module
//!
//! The terminal front end of the card viewer.
//!
//! ## Components
//!
//! - [`App`] - the viewer's state (deck, pager, page size, swipe, form)
//! - [`mod@input`] - maps key, mouse and resize events onto [`App`]
//! - [`mod@layout`] - screen geometry and mouse hit testing
//! - [`mod@render`] - drawing functions
//! - [`Config`] / [`Theme`] / [`Variant`] - preferences, colours, presets
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                        │
//! ├─────────────────────────────────────────────────┤
//! │              Add-entry form (optional)           │
//! ├─────────────────────────────────────────────────┤
//! │                                                  │
//! │                  Card grid                       │
//! │                                                  │
//! ├─────────────────────────────────────────────────┤
//! │         Previous     1 / 2     Next              │
//! ├─────────────────────────────────────────────────┤
//! │      Show all / page size (optional)             │
//! ├─────────────────────────────────────────────────┤
//! │                    Footer                        │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod features;
pub mod input;
pub mod layout;
pub mod render;
pub mod theme;

pub use app::App;
pub use config::Config;
pub use features::{Features, Variant};
pub use render::render;
pub use theme::Theme;
