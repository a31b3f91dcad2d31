//! Screen geometry shared by the renderer and mouse hit testing.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Header (title, card count)                    │
//! ├────────┬───────────────────────────┬──────────┤
//! │ Glyph  │ Gloss                     │  Add     │  add_form only
//! ├────────┴───────────────────────────┴──────────┤
//! │                                               │
//! │   card grid (swipe area)                      │
//! │                                               │
//! ├──────────┬────────────────────────┬───────────┤
//! │ Previous │        1 / 2           │   Next    │
//! ├──────────┴──────┬──────────────┬──┴───────────┤
//! │ Show all        │ Page size    │              │  show_all / picker only
//! ├─────────────────┴──────────────┴──────────────┤
//! │ Footer (hints)                                │
//! └───────────────────────────────────────────────┘
//! ```

use crate::ui::features::Features;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const CARD_WIDTH: u16 = 12;
pub const CARD_HEIGHT: u16 = 5;

const BUTTON_WIDTH: u16 = 12;
const GLYPH_INPUT_WIDTH: u16 = 14;
const ADD_BUTTON_WIDTH: u16 = 10;
const SHOW_ALL_WIDTH: u16 = 20;
const PAGE_SIZE_WIDTH: u16 = 22;

/// Something the mouse can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    GlyphInput,
    GlossInput,
    AddButton,
    Cards,
    PreviousButton,
    NextButton,
    ShowAllToggle,
    PageSizePicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub glyph: Rect,
    pub gloss: Rect,
    pub add: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationLayout {
    pub previous: Rect,
    pub label: Rect,
    pub next: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsLayout {
    pub show_all: Option<Rect>,
    pub page_size: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Option<FormLayout>,
    pub cards: Rect,
    pub pagination: PaginationLayout,
    pub controls: Option<ControlsLayout>,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, features: &Features) -> Self {
        let mut constraints = vec![Constraint::Length(3)];
        if features.add_form {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Min(CARD_HEIGHT));
        constraints.push(Constraint::Length(3));
        if features.has_controls() {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut rects = chunks.iter().copied();

        let header = rects.next().unwrap_or_default();
        let form = if features.add_form {
            Some(split_form(rects.next().unwrap_or_default()))
        } else {
            None
        };
        let cards = rects.next().unwrap_or_default();
        let pagination = split_pagination(rects.next().unwrap_or_default());
        let controls = if features.has_controls() {
            Some(split_controls(rects.next().unwrap_or_default(), features))
        } else {
            None
        };
        let footer = rects.next().unwrap_or_default();

        Self {
            header,
            form,
            cards,
            pagination,
            controls,
            footer,
        }
    }

    /// What sits under the terminal cell at (`column`, `row`).
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let hit = |rect: Rect| contains(rect, column, row);

        if let Some(form) = &self.form {
            if hit(form.glyph) {
                return Some(Target::GlyphInput);
            }
            if hit(form.gloss) {
                return Some(Target::GlossInput);
            }
            if hit(form.add) {
                return Some(Target::AddButton);
            }
        }

        if hit(self.cards) {
            return Some(Target::Cards);
        }
        if hit(self.pagination.previous) {
            return Some(Target::PreviousButton);
        }
        if hit(self.pagination.next) {
            return Some(Target::NextButton);
        }

        if let Some(controls) = &self.controls {
            if controls.show_all.is_some_and(hit) {
                return Some(Target::ShowAllToggle);
            }
            if controls.page_size.is_some_and(hit) {
                return Some(Target::PageSizePicker);
            }
        }

        None
    }
}

fn split_form(area: Rect) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(GLYPH_INPUT_WIDTH),
            Constraint::Min(10),
            Constraint::Length(ADD_BUTTON_WIDTH),
        ])
        .split(area);

    FormLayout {
        glyph: chunks[0],
        gloss: chunks[1],
        add: chunks[2],
    }
}

fn split_pagination(area: Rect) -> PaginationLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(area);

    PaginationLayout {
        previous: chunks[0],
        label: chunks[1],
        next: chunks[2],
    }
}

fn split_controls(area: Rect, features: &Features) -> ControlsLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SHOW_ALL_WIDTH),
            Constraint::Length(PAGE_SIZE_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    match (features.show_all_toggle, features.page_size_picker) {
        (true, true) => ControlsLayout {
            show_all: Some(chunks[0]),
            page_size: Some(chunks[1]),
        },
        (true, false) => ControlsLayout {
            show_all: Some(chunks[0]),
            page_size: None,
        },
        // picker takes the first slot when it is alone
        (false, true) => ControlsLayout {
            show_all: None,
            page_size: Some(Rect {
                width: PAGE_SIZE_WIDTH.min(area.width),
                ..chunks[0]
            }),
        },
        (false, false) => ControlsLayout {
            show_all: None,
            page_size: None,
        },
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Positions of up to `count` cards laid out in a centred grid inside `area`.
///
/// Cards that do not fit are left out; the renderer shows how many are hidden.
pub fn card_rects(area: Rect, count: usize) -> Vec<Rect> {
    let columns = (area.width / CARD_WIDTH).max(1);
    let rows = area.height / CARD_HEIGHT;
    let capacity = usize::from(columns) * usize::from(rows);

    let used_width = (columns * CARD_WIDTH).min(area.width);
    let offset_x = (area.width - used_width) / 2;

    (0..count.min(capacity))
        .map(|i| {
            let col = (i % usize::from(columns)) as u16;
            let row = (i / usize::from(columns)) as u16;
            Rect {
                x: area.x + offset_x + col * CARD_WIDTH,
                y: area.y + row * CARD_HEIGHT,
                width: CARD_WIDTH.min(area.width),
                height: CARD_HEIGHT,
            }
        })
        .collect()
}
