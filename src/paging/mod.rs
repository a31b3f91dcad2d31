//! # Paging Module
//!
//! The navigation logic behind the card viewer, independent of any terminal.
//!
//! ## Components
//!
//! - [`Pager`] - page cursor, page slicing, show-all mode
//! - [`PageSizeMode`] - automatic (width-derived) or manual page size
//! - [`SwipeTracker`] - horizontal swipe detection from pointer coordinates
//!
//! ## Units
//!
//! Widths and coordinates are in pixels. The terminal front end converts
//! columns to pixels with the configured cell width before calling in here.

pub mod page_size;
pub mod pager;
pub mod swipe;

pub use page_size::{auto_page_size, PageSizeMode, PAGE_SIZE_CHOICES};
pub use pager::Pager;
pub use swipe::{SwipeDirection, SwipeTracker, SWIPE_THRESHOLD_PX};
