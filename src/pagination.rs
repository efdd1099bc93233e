//! Pagination window rendering for the client list.
//!
//! Given a zero-based current page and a total page count this module
//! computes the contiguous run of one-based page numbers shown as
//! navigation links, kept centered on the current page as far as the
//! boundaries allow.

use serde::Serialize;

/// Number of page links shown in the navigation window. Must stay odd.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Number of clients shown per list page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Navigation metadata for one rendered list page.
///
/// All page numbers are one-based as shown to the user; `current` is the
/// requested zero-based page shifted by one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageWindow {
    /// Contiguous one-based page numbers to render as links.
    pub pages: Vec<usize>,
    /// One-based current page.
    pub current: usize,
    /// Always 1, for the "jump to first" link.
    pub first: usize,
    /// Equals the total page count, for the "jump to last" link.
    pub last: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageWindow {
    /// Computes the window for `current_page` (zero-based) out of
    /// `total_pages`.
    ///
    /// A `total_pages` of zero is treated as a single empty page. Passing an
    /// out-of-range `current_page` or an even or zero `window_size` is a
    /// programming error and panics; callers clamp user input first.
    pub fn new(current_page: usize, total_pages: usize, window_size: usize) -> Self {
        assert!(
            window_size % 2 == 1,
            "window size must be a positive odd number"
        );

        let total_pages = total_pages.max(1);
        assert!(
            current_page < total_pages,
            "current page {current_page} out of range for {total_pages} pages"
        );

        let current = current_page + 1;
        let half = window_size / 2;

        let mut start = current.saturating_sub(half).max(1);
        let mut end = start + window_size - 1;
        if end > total_pages {
            end = total_pages;
            start = end.saturating_sub(window_size - 1).max(1);
        }

        Self {
            pages: (start..=end).collect(),
            current,
            first: 1,
            last: total_pages,
            has_previous: current_page > 0,
            has_next: current < total_pages,
        }
    }
}

/// A page of items together with its navigation window, shaped for the
/// templates.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub window: PageWindow,
}

impl<T> Paginated<T> {
    /// Wraps one page slice. `current_page` is zero-based and must already be
    /// within `[0, total_pages)`.
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        Self {
            items,
            window: PageWindow::new(current_page, total_pages, DEFAULT_WINDOW_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_at_first_page() {
        let window = PageWindow::new(0, 10, 5);
        assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
        assert!(!window.has_previous);
        assert!(window.has_next);
        assert_eq!(window.first, 1);
        assert_eq!(window.last, 10);
    }

    #[test]
    fn window_at_last_page() {
        let window = PageWindow::new(9, 10, 5);
        assert_eq!(window.pages, vec![6, 7, 8, 9, 10]);
        assert!(window.has_previous);
        assert!(!window.has_next);
    }

    #[test]
    fn window_clamped_to_available_pages() {
        let window = PageWindow::new(1, 3, 5);
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert!(window.has_previous);
        assert!(window.has_next);
    }

    #[test]
    fn window_centered_in_the_middle() {
        let window = PageWindow::new(4, 10, 5);
        assert_eq!(window.pages, vec![3, 4, 5, 6, 7]);
        assert_eq!(window.current, 5);
    }

    #[test]
    fn window_length_and_contiguity() {
        for total_pages in 1..=12 {
            for current_page in 0..total_pages {
                let window = PageWindow::new(current_page, total_pages, 5);
                assert_eq!(window.pages.len(), total_pages.min(5));
                for pair in window.pages.windows(2) {
                    assert_eq!(pair[1], pair[0] + 1);
                }
                assert!(window.pages.contains(&(current_page + 1)));
                assert!(*window.pages.first().unwrap() >= 1);
                assert!(*window.pages.last().unwrap() <= total_pages);
                assert_eq!(window.has_previous, current_page > 0);
                assert_eq!(window.has_next, current_page < total_pages - 1);
            }
        }
    }

    #[test]
    fn zero_total_pages_is_a_single_virtual_page() {
        let window = PageWindow::new(0, 0, 5);
        assert_eq!(window.pages, vec![1]);
        assert_eq!(window.current, 1);
        assert_eq!(window.last, 1);
        assert!(!window.has_previous);
        assert!(!window.has_next);
    }

    #[test]
    #[should_panic(expected = "odd")]
    fn even_window_size_panics() {
        let _ = PageWindow::new(0, 10, 4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_page_panics() {
        let _ = PageWindow::new(3, 3, 5);
    }

    #[test]
    fn paginated_uses_default_window() {
        let paginated = Paginated::new(vec!["a", "b"], 0, 2);
        assert_eq!(paginated.window.pages, vec![1, 2]);
        assert_eq!(paginated.items.len(), 2);
    }
}
