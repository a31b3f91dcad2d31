use std::ops::Range;

/// Page cursor over a sequence of `n` records.
///
/// The pager does not own the records; every query takes the current record
/// count so the deck can grow underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
    show_all: bool,
}

impl Pager {
    /// Create a pager on page 0. A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 0,
            show_all: false,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    /// Number of pages for `n` records. Never less than 1.
    pub fn total_pages(&self, n: usize) -> usize {
        if self.show_all {
            return 1;
        }
        n.div_ceil(self.page_size).max(1)
    }

    /// Index range of the records visible on the current page.
    pub fn visible_range(&self, n: usize) -> Range<usize> {
        if self.show_all {
            return 0..n;
        }
        let start = self.current_page.saturating_mul(self.page_size).min(n);
        let end = start.saturating_add(self.page_size).min(n);
        start..end
    }

    /// Jump to `page`. Out-of-range requests are ignored and return `false`.
    pub fn go_to_page(&mut self, page: isize, n: usize) -> bool {
        let Ok(page) = usize::try_from(page) else {
            return false;
        };
        if page >= self.total_pages(n) {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self, n: usize) -> bool {
        self.go_to_page(self.current_page as isize + 1, n)
    }

    pub fn previous_page(&mut self, n: usize) -> bool {
        self.go_to_page(self.current_page as isize - 1, n)
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 0
    }

    pub fn is_last_page(&self, n: usize) -> bool {
        self.current_page + 1 >= self.total_pages(n)
    }

    /// Flip between paginated and show-all mode. Always lands on page 0.
    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
        self.current_page = 0;
    }

    /// Explicit page size change from the user. Resets to page 0.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        self.page_size = page_size;
        self.current_page = 0;
    }

    /// Page size change driven by a viewport resize. Keeps the current page
    /// when it still exists, otherwise clamps to the last page.
    pub fn resize_page_size(&mut self, page_size: usize, n: usize) {
        if page_size == 0 || page_size == self.page_size {
            return;
        }
        self.page_size = page_size;
        let last = self.total_pages(n) - 1;
        self.current_page = self.current_page.min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        let pager = Pager::new(6);
        assert_eq!(pager.total_pages(12), 2);
        assert_eq!(pager.total_pages(13), 3);
        assert_eq!(pager.total_pages(1), 1);
    }

    #[test]
    fn test_total_pages_minimum_one() {
        let pager = Pager::new(4);
        assert_eq!(pager.total_pages(0), 1);
        assert_eq!(pager.visible_range(0), 0..0);
    }

    #[test]
    fn test_pages_concatenate_to_full_sequence() {
        for n in 0..40usize {
            for size in 1..=17usize {
                let mut pager = Pager::new(size);
                let mut seen = Vec::new();
                for page in 0..pager.total_pages(n) {
                    assert!(pager.go_to_page(page as isize, n));
                    seen.extend(pager.visible_range(n));
                }
                assert_eq!(pager.total_pages(n), n.div_ceil(size).max(1));
                assert_eq!(seen, (0..n).collect::<Vec<_>>(), "n={} size={}", n, size);
            }
        }
    }

    #[test]
    fn test_last_page_is_partial() {
        let mut pager = Pager::new(5);
        assert!(pager.go_to_page(2, 12));
        assert_eq!(pager.visible_range(12), 10..12);
    }

    #[test]
    fn test_out_of_range_navigation_is_noop() {
        let mut pager = Pager::new(6);
        assert!(!pager.go_to_page(-1, 12));
        assert_eq!(pager.current_page(), 0);

        assert!(pager.go_to_page(1, 12));
        assert!(!pager.go_to_page(2, 12));
        assert_eq!(pager.current_page(), 1);

        assert!(!pager.next_page(12));
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_previous_on_first_page_is_noop() {
        let mut pager = Pager::new(6);
        assert!(!pager.previous_page(12));
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn test_toggle_show_all_resets_page() {
        let mut pager = Pager::new(4);
        assert!(pager.go_to_page(2, 12));

        pager.toggle_show_all();
        assert!(pager.show_all());
        assert_eq!(pager.current_page(), 0);
        assert_eq!(pager.total_pages(12), 1);
        assert_eq!(pager.visible_range(12), 0..12);
        assert!(!pager.next_page(12));

        pager.toggle_show_all();
        assert!(!pager.show_all());
        assert_eq!(pager.current_page(), 0);
        assert_eq!(pager.total_pages(12), 3);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut pager = Pager::new(4);
        assert!(pager.go_to_page(2, 12));
        pager.set_page_size(8);
        assert_eq!(pager.page_size(), 8);
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn test_set_page_size_zero_ignored() {
        let mut pager = Pager::new(4);
        pager.set_page_size(0);
        assert_eq!(pager.page_size(), 4);
        assert_eq!(Pager::new(0).page_size(), 1);
    }

    #[test]
    fn test_resize_page_size_clamps_current_page() {
        let mut pager = Pager::new(4);
        assert!(pager.go_to_page(2, 12));

        pager.resize_page_size(10, 12);
        assert_eq!(pager.page_size(), 10);
        assert_eq!(pager.current_page(), 1);

        pager.resize_page_size(6, 12);
        assert_eq!(pager.current_page(), 1);
    }
}
