//! Hanzi Cards - a small terminal viewer for Chinese character cards
//!
//! This library holds the card deck, the paging logic (page slicing, page
//! size selection, swipe detection) and the ratatui front end built on them.

pub mod deck;
pub mod paging;
pub mod ui;
