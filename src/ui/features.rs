//! Optional parts of the viewer and the presets that bundle them.
//!
//! The viewer exists in two historical flavours: a glossary with an add-entry
//! form and a fixed page size, and a browser with a show-all toggle and a
//! page-size picker. Rather than merging them, each part is a switch in
//! [`Features`] and [`Variant`] picks a bundle.

use crate::deck::Dataset;
use crate::paging::PageSizeMode;
use serde::{Deserialize, Serialize};

/// Which optional controls are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub add_form: bool,
    pub show_all_toggle: bool,
    pub page_size_picker: bool,
}

impl Features {
    pub fn all() -> Self {
        Self {
            add_form: true,
            show_all_toggle: true,
            page_size_picker: true,
        }
    }

    /// Whether the controls row (show-all / page size) is drawn at all.
    pub fn has_controls(&self) -> bool {
        self.show_all_toggle || self.page_size_picker
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Glossed greetings, add-entry form, six cards per page.
    Glossary,
    /// Unglossed basics, show-all toggle, page-size picker.
    Browser,
    /// Every control, glossed greetings, automatic page size.
    #[default]
    Full,
}

impl Variant {
    pub fn features(&self) -> Features {
        match self {
            Variant::Glossary => Features {
                add_form: true,
                show_all_toggle: false,
                page_size_picker: false,
            },
            Variant::Browser => Features {
                add_form: false,
                show_all_toggle: true,
                page_size_picker: true,
            },
            Variant::Full => Features::all(),
        }
    }

    pub fn dataset(&self) -> Dataset {
        match self {
            Variant::Glossary | Variant::Full => Dataset::Greetings,
            Variant::Browser => Dataset::Basics,
        }
    }

    pub fn page_size(&self) -> PageSizeMode {
        match self {
            Variant::Glossary => PageSizeMode::Manual(6),
            Variant::Browser | Variant::Full => PageSizeMode::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glossary_preset() {
        let v = Variant::Glossary;
        assert!(v.features().add_form);
        assert!(!v.features().has_controls());
        assert_eq!(v.dataset(), Dataset::Greetings);
        assert_eq!(v.page_size(), PageSizeMode::Manual(6));
    }

    #[test]
    fn test_browser_preset() {
        let v = Variant::Browser;
        assert!(!v.features().add_form);
        assert!(v.features().show_all_toggle);
        assert!(v.features().page_size_picker);
        assert_eq!(v.dataset(), Dataset::Basics);
        assert!(v.page_size().is_auto());
    }

    #[test]
    fn test_default_variant_is_full() {
        assert_eq!(Variant::default(), Variant::Full);
        assert_eq!(Variant::Full.features(), Features::all());
    }
}
