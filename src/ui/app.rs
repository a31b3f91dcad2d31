use crate::deck::{CharacterRecord, Dataset, Deck};
use crate::paging::{auto_page_size, PageSizeMode, Pager, SwipeDirection, SwipeTracker};
use crate::ui::config::Config;
use crate::ui::features::Features;
use crate::ui::theme::Theme;

/// Input fields of the add-entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Glyph,
    Gloss,
}

/// Add-entry form state: two text buffers and which one has focus.
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub glyph: String,
    pub gloss: String,
    /// `None` while the user is navigating cards.
    pub focus: Option<FormField>,
}

impl EntryForm {
    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    pub fn focus(&mut self, field: FormField) {
        self.focus = Some(field);
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    pub fn switch_field(&mut self) {
        self.focus = match self.focus {
            Some(FormField::Glyph) => Some(FormField::Gloss),
            Some(FormField::Gloss) => Some(FormField::Glyph),
            None => None,
        };
    }

    /// Type into the focused field. The glyph field holds one character.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            Some(FormField::Glyph) => {
                if self.glyph.is_empty() {
                    self.glyph.push(c);
                }
            }
            Some(FormField::Gloss) => self.gloss.push(c),
            None => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            Some(FormField::Glyph) => {
                self.glyph.pop();
            }
            Some(FormField::Gloss) => {
                self.gloss.pop();
            }
            None => {}
        }
    }

    pub fn clear_inputs(&mut self) {
        self.glyph.clear();
        self.gloss.clear();
    }
}

/// The viewer's entire state. Every handler mutates it synchronously.
pub struct App {
    pub deck: Deck,
    pub dataset: Dataset,
    pub pager: Pager,
    pub page_size_mode: PageSizeMode,
    pub features: Features,
    pub form: EntryForm,
    pub swipe: SwipeTracker,
    pub viewport_width_px: u32,
    pub cell_width_px: u16,
    pub theme: Theme,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        dataset: Dataset,
        features: Features,
        page_size_mode: PageSizeMode,
        theme: Theme,
    ) -> Self {
        let viewport_width_px = 0;
        Self {
            deck: Deck::from_dataset(dataset),
            dataset,
            pager: Pager::new(page_size_mode.resolve(viewport_width_px)),
            page_size_mode,
            features,
            form: EntryForm::default(),
            swipe: SwipeTracker::new(),
            viewport_width_px,
            cell_width_px: crate::ui::config::DEFAULT_CELL_WIDTH_PX,
            theme,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let theme = Theme::by_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using default", config.theme);
            Theme::default_theme()
        });

        let mut app = Self::new(
            config.effective_dataset(),
            config.variant.features(),
            config.effective_page_size(),
            theme.clone(),
        );
        app.cell_width_px = config.cell_width_px.max(1);
        app
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn visible_records(&self) -> &[CharacterRecord] {
        self.deck.slice(self.pager.visible_range(self.len()))
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.len())
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    pub fn show_all(&self) -> bool {
        self.pager.show_all()
    }

    pub fn is_first_page(&self) -> bool {
        self.pager.is_first_page()
    }

    pub fn is_last_page(&self) -> bool {
        self.pager.is_last_page(self.len())
    }

    /// `"2 / 3"` style counter for the pagination bar.
    pub fn page_label(&self) -> String {
        format!("{} / {}", self.current_page() + 1, self.total_pages())
    }

    pub fn go_to_page(&mut self, page: isize) -> bool {
        let moved = self.pager.go_to_page(page, self.len());
        if moved {
            tracing::debug!(page, total = self.total_pages(), "page changed");
        }
        moved
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page() as isize + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page() as isize - 1)
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(0)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages() as isize - 1)
    }

    pub fn toggle_show_all(&mut self) {
        self.pager.toggle_show_all();
        tracing::debug!(show_all = self.show_all(), "show-all toggled");
    }

    /// Apply a raw picker value such as `"8"` or `"auto"`.
    pub fn select_page_size(&mut self, value: &str) {
        self.set_page_size_mode(PageSizeMode::parse_selection(value));
    }

    /// Switch page size mode. Always returns to the first page.
    pub fn set_page_size_mode(&mut self, mode: PageSizeMode) {
        self.page_size_mode = mode;
        self.pager
            .set_page_size(mode.resolve(self.viewport_width_px));
        tracing::debug!(mode = %mode, page_size = self.page_size(), "page size selected");
    }

    pub fn cycle_page_size(&mut self, forward: bool) {
        let mode = if forward {
            self.page_size_mode.cycle_next()
        } else {
            self.page_size_mode.cycle_prev()
        };
        self.set_page_size_mode(mode);
    }

    /// Viewport width changed. Only automatic sizing reacts.
    pub fn handle_resize(&mut self, width_px: u32) {
        self.viewport_width_px = width_px;
        if self.page_size_mode.is_auto() {
            let len = self.len();
            self.pager.resize_page_size(auto_page_size(width_px), len);
        }
        tracing::debug!(width_px, page_size = self.page_size(), "viewport resized");
    }

    /// Terminal resize, in columns.
    pub fn handle_terminal_resize(&mut self, columns: u16) {
        self.handle_resize(u32::from(columns) * u32::from(self.cell_width_px));
    }

    /// Pixel x coordinate of a terminal column.
    pub fn column_to_px(&self, column: u16) -> f64 {
        f64::from(column) * f64::from(self.cell_width_px)
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.touch_start(x);
    }

    pub fn touch_move(&mut self, x: f64) {
        self.swipe.touch_move(x);
    }

    /// Finish a gesture and turn the page if it was a swipe.
    pub fn touch_end(&mut self) {
        let direction = self.swipe.touch_end();
        tracing::trace!(?direction, "swipe ended");
        match direction {
            Some(SwipeDirection::Next) if !self.is_last_page() => {
                self.next_page();
            }
            Some(SwipeDirection::Previous) if !self.is_first_page() => {
                self.previous_page();
            }
            _ => {}
        }
    }

    /// Add the form's contents to the deck. Blank glyphs are ignored.
    pub fn submit_entry(&mut self) -> bool {
        if !self.deck.add_entry(&self.form.glyph, &self.form.gloss) {
            return false;
        }
        tracing::debug!(glyph = %self.form.glyph.trim(), total = self.len(), "entry added");
        self.form.clear_inputs();
        true
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next().clone();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
