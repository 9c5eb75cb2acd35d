//! Page requests and the numbered page-button window

use serde::{Deserialize, Serialize};

/// Most numbered page buttons shown at once
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// One page of a paginated listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based)
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

impl PageRequest {
    /// Build a request, clamping both values to at least one
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Query parameters in the order the API expects them
    #[must_use]
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// Page numbers to render as buttons
///
/// Shows every page when there are at most five; otherwise a five-wide window
/// centred on `current`, pinned to the first or last five pages near either end.
#[must_use]
pub fn page_window(current: u32, total_pages: u32) -> Vec<u32> {
    let total = total_pages.max(1);
    let current = current.clamp(1, total);

    let first = if total <= MAX_VISIBLE_PAGES || current <= 3 {
        1
    } else if current >= total - 2 {
        total - (MAX_VISIBLE_PAGES - 1)
    } else {
        current - 2
    };

    let last = first + (total.min(MAX_VISIBLE_PAGES) - 1);
    (first..=last).collect()
}

/// Everything a pagination control renders
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageControls {
    /// Page currently shown
    pub current: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Numbered buttons
    pub pages: Vec<u32>,
}

impl PageControls {
    /// Compute the controls for a position in the listing
    #[must_use]
    pub fn new(current: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current,
            total_pages,
            pages: page_window(current, total_pages),
        }
    }

    /// Target of the Previous button
    #[must_use]
    pub fn previous_page(&self) -> u32 {
        self.current.saturating_sub(1).max(1)
    }

    /// Target of the Next button
    #[must_use]
    pub fn next_page(&self) -> u32 {
        self.current.saturating_add(1).min(self.total_pages)
    }

    /// Whether Previous is disabled
    #[must_use]
    pub const fn at_first(&self) -> bool {
        self.current <= 1
    }

    /// Whether Next is disabled
    #[must_use]
    pub const fn at_last(&self) -> bool {
        self.current >= self.total_pages
    }

    /// Whether a numbered button is the active one
    #[must_use]
    pub const fn is_current(&self, page: u32) -> bool {
        self.current == page
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 12, vec![1, 2, 3, 4, 5])]
    #[case(3, 12, vec![1, 2, 3, 4, 5])]
    #[case(4, 12, vec![2, 3, 4, 5, 6])]
    #[case(6, 12, vec![4, 5, 6, 7, 8])]
    #[case(10, 12, vec![8, 9, 10, 11, 12])]
    #[case(12, 12, vec![8, 9, 10, 11, 12])]
    #[case(1, 1, vec![1])]
    #[case(2, 3, vec![1, 2, 3])]
    #[case(5, 5, vec![1, 2, 3, 4, 5])]
    #[case(4, 6, vec![2, 3, 4, 5, 6])]
    fn test_page_window(#[case] current: u32, #[case] total: u32, #[case] expected: Vec<u32>) {
        assert_eq!(page_window(current, total), expected);
    }

    #[test]
    fn test_page_window_near_u32_max() {
        let max = u32::MAX;
        assert_eq!(
            page_window(max, max),
            vec![max - 4, max - 3, max - 2, max - 1, max]
        );
        assert_eq!(PageControls::new(max, max).next_page(), max);
    }

    #[test]
    fn test_page_window_zero_pages_shows_one() {
        assert_eq!(page_window(1, 0), vec![1]);
    }

    #[test]
    fn test_page_request_clamps() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request, PageRequest { page: 1, limit: 1 });
    }

    #[test]
    fn test_page_request_query() {
        let query = PageRequest::new(3, 10).query();
        assert_eq!(
            query,
            [("page", "3".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn test_controls_at_boundaries() {
        let first = PageControls::new(1, 12);
        assert!(first.at_first());
        assert!(!first.at_last());
        assert_eq!(first.previous_page(), 1);
        assert_eq!(first.next_page(), 2);

        let last = PageControls::new(12, 12);
        assert!(last.at_last());
        assert_eq!(last.next_page(), 12);
        assert_eq!(last.previous_page(), 11);
        assert!(last.is_current(12));
    }

    #[test]
    fn test_single_page_disables_both_directions() {
        let controls = PageControls::new(1, 1);
        assert!(controls.at_first());
        assert!(controls.at_last());
        assert_eq!(controls.pages, vec![1]);
    }

    proptest! {
        #[test]
        fn prop_window_is_contiguous_and_contains_current(total in 1u32..500, seed in 0u32..500) {
            let current = seed % total + 1;
            let window = page_window(current, total);

            prop_assert_eq!(window.len() as u32, total.min(MAX_VISIBLE_PAGES));
            prop_assert!(window.contains(&current));
            prop_assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
            prop_assert!(window.first().copied().unwrap_or(0) >= 1);
            prop_assert!(window.last().copied().unwrap_or(0) <= total);
        }

        #[test]
        fn prop_window_stays_in_range_for_large_totals(total in 5u32.., seed in any::<u32>()) {
            let current = seed % total + 1;
            let window = page_window(current, total);

            prop_assert_eq!(window.len(), 5);
            prop_assert!(window.contains(&current));
            prop_assert!(window.last().copied().unwrap_or(0) <= total);
        }
    }
}
