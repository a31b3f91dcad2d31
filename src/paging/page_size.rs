use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Page sizes offered by the picker, in cycling order.
pub const PAGE_SIZE_CHOICES: [usize; 6] = [4, 6, 8, 10, 12, 16];

/// Viewport width breakpoints in pixels, widest first.
const BREAKPOINTS: [(u32, usize); 2] = [(768, 10), (480, 6)];

/// Page size for narrow viewports below every breakpoint.
const NARROW_PAGE_SIZE: usize = 4;

/// Width-derived page size.
pub fn auto_page_size(width_px: u32) -> usize {
    BREAKPOINTS
        .iter()
        .find(|(min_width, _)| width_px >= *min_width)
        .map_or(NARROW_PAGE_SIZE, |(_, size)| *size)
}

/// How the page size is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSizeMode {
    /// Follow the viewport width.
    #[default]
    Auto,
    /// Fixed by the user.
    Manual(usize),
}

impl PageSizeMode {
    /// Interpret a picker value.
    ///
    /// `"auto"`, anything unparseable, and non-positive numbers all mean
    /// [`PageSizeMode::Auto`].
    pub fn parse_selection(value: &str) -> Self {
        match value.trim().parse::<i64>() {
            Ok(n) if n > 0 => usize::try_from(n).map_or(Self::Auto, Self::Manual),
            _ => Self::Auto,
        }
    }

    /// Effective page size for a viewport `width_px` wide.
    pub fn resolve(&self, width_px: u32) -> usize {
        match self {
            Self::Auto => auto_page_size(width_px),
            Self::Manual(n) => *n,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Next picker entry: Auto, then each of [`PAGE_SIZE_CHOICES`], then Auto.
    pub fn cycle_next(&self) -> Self {
        match self {
            Self::Auto => Self::Manual(PAGE_SIZE_CHOICES[0]),
            Self::Manual(n) => PAGE_SIZE_CHOICES
                .iter()
                .find(|choice| *choice > n)
                .map_or(Self::Auto, |choice| Self::Manual(*choice)),
        }
    }

    /// Previous picker entry.
    pub fn cycle_prev(&self) -> Self {
        match self {
            Self::Auto => Self::Manual(PAGE_SIZE_CHOICES[PAGE_SIZE_CHOICES.len() - 1]),
            Self::Manual(n) => PAGE_SIZE_CHOICES
                .iter()
                .rev()
                .find(|choice| *choice < n)
                .map_or(Self::Auto, |choice| Self::Manual(*choice)),
        }
    }
}

impl fmt::Display for PageSizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Manual(n) => write!(f, "{}", n),
        }
    }
}

impl std::str::FromStr for PageSizeMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_selection(s))
    }
}

// Stored in the config file as the same string the picker shows.
impl Serialize for PageSizeMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PageSizeMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
            Other(serde::de::IgnoredAny),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::parse_selection(&n.to_string()),
            Raw::Text(s) => Self::parse_selection(&s),
            Raw::Other(_) => Self::Auto,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_page_size_breakpoints() {
        assert_eq!(auto_page_size(1920), 10);
        assert_eq!(auto_page_size(768), 10);
        assert_eq!(auto_page_size(767), 6);
        assert_eq!(auto_page_size(480), 6);
        assert_eq!(auto_page_size(479), 4);
        assert_eq!(auto_page_size(0), 4);
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(PageSizeMode::parse_selection("8"), PageSizeMode::Manual(8));
        assert_eq!(PageSizeMode::parse_selection(" 16 "), PageSizeMode::Manual(16));
        assert_eq!(PageSizeMode::parse_selection("auto"), PageSizeMode::Auto);
    }

    #[test]
    fn test_parse_selection_invalid_means_auto() {
        assert_eq!(PageSizeMode::parse_selection("0"), PageSizeMode::Auto);
        assert_eq!(PageSizeMode::parse_selection("-3"), PageSizeMode::Auto);
        assert_eq!(PageSizeMode::parse_selection("abc"), PageSizeMode::Auto);
        assert_eq!(PageSizeMode::parse_selection(""), PageSizeMode::Auto);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(PageSizeMode::Auto.resolve(800), 10);
        assert_eq!(PageSizeMode::Manual(12).resolve(800), 12);
        assert_eq!(PageSizeMode::Manual(12).resolve(100), 12);
    }

    #[test]
    fn test_cycle_next_walks_all_choices() {
        let mut mode = PageSizeMode::Auto;
        let mut seen = Vec::new();
        for _ in 0..PAGE_SIZE_CHOICES.len() {
            mode = mode.cycle_next();
            seen.push(mode.resolve(0));
        }
        assert_eq!(seen, PAGE_SIZE_CHOICES.to_vec());
        assert_eq!(mode.cycle_next(), PageSizeMode::Auto);
    }

    #[test]
    fn test_cycle_prev_is_reverse() {
        assert_eq!(PageSizeMode::Auto.cycle_prev(), PageSizeMode::Manual(16));
        assert_eq!(PageSizeMode::Manual(4).cycle_prev(), PageSizeMode::Auto);
        assert_eq!(PageSizeMode::Manual(10).cycle_prev(), PageSizeMode::Manual(8));
        // off-list sizes snap to the nearest choice
        assert_eq!(PageSizeMode::Manual(7).cycle_next(), PageSizeMode::Manual(8));
        assert_eq!(PageSizeMode::Manual(7).cycle_prev(), PageSizeMode::Manual(6));
    }

    #[test]
    fn test_display_matches_selection() {
        for mode in [PageSizeMode::Auto, PageSizeMode::Manual(6)] {
            assert_eq!(PageSizeMode::parse_selection(&mode.to_string()), mode);
        }
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let mode: PageSizeMode = serde_json::from_str("8").expect("number");
        assert_eq!(mode, PageSizeMode::Manual(8));
        let mode: PageSizeMode = serde_json::from_str("\"auto\"").expect("string");
        assert_eq!(mode, PageSizeMode::Auto);
        let mode: PageSizeMode = serde_json::from_str("-1").expect("negative");
        assert_eq!(mode, PageSizeMode::Auto);
    }

    #[test]
    fn test_deserialize_other_json_types_mean_auto() {
        for json in ["8.5", "true", "{}"] {
            let mode: PageSizeMode = serde_json::from_str(json).expect("any value");
            assert_eq!(mode, PageSizeMode::Auto, "{}", json);
        }
    }
}
