// Row scrolling for the table body
//
// A page can hold more rows than the terminal has lines. The body keeps a
// row offset into the page; scrolling never changes which page is shown.
//
// Dimensions are refreshed from every drawn frame, so the offset always
// fits the page and viewport that were last on screen.

/// Scroll position over the rows of one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Index of the first visible row
    offset: usize,

    /// Rows on the current page
    total: usize,

    /// Rows that fit in the body area
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the sizes of the frame being drawn, clamping the offset
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Move up one row; false when already at the top
    pub fn scroll_up(&mut self) -> bool {
        if self.offset == 0 {
            return false;
        }
        self.offset -= 1;
        true
    }

    /// Move down one row; false when the last row is already visible
    pub fn scroll_down(&mut self) -> bool {
        if self.offset >= self.max_offset() {
            return false;
        }
        self.offset += 1;
        true
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Visible rows as (start, end), end exclusive
    pub fn visible_range(&self) -> (usize, usize) {
        let end = self.offset.saturating_add(self.viewport).min(self.total);
        (self.offset.min(end), end)
    }

    /// Rows cut off above and below the viewport
    pub fn hidden(&self) -> (usize, usize) {
        let (start, end) = self.visible_range();
        (start, self.total - end)
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total: usize, viewport: usize) -> ScrollState {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(total, viewport);
        scroll
    }

    #[test]
    fn fitting_content_never_scrolls() {
        let mut scroll = state(5, 7);
        assert!(!scroll.scroll_down());
        assert!(!scroll.scroll_up());
        assert_eq!(scroll.visible_range(), (0, 5));
        assert_eq!(scroll.hidden(), (0, 0));
    }

    #[test]
    fn scroll_stops_at_last_row() {
        let mut scroll = state(10, 7);
        assert_eq!(scroll.hidden(), (0, 3));

        for _ in 0..3 {
            assert!(scroll.scroll_down());
        }
        assert!(!scroll.scroll_down());
        assert_eq!(scroll.visible_range(), (3, 10));
        assert_eq!(scroll.hidden(), (3, 0));

        assert!(scroll.scroll_up());
        assert_eq!(scroll.hidden(), (2, 1));
    }

    #[test]
    fn shrinking_page_clamps_offset() {
        let mut scroll = state(10, 7);
        scroll.scroll_down();
        scroll.scroll_down();
        scroll.update_dimensions(8, 7);
        assert_eq!(scroll.visible_range(), (1, 8));

        scroll.update_dimensions(3, 7);
        assert_eq!(scroll.visible_range(), (0, 3));
    }

    #[test]
    fn taller_terminal_reveals_hidden_rows() {
        let mut scroll = state(10, 4);
        scroll.scroll_down();
        scroll.update_dimensions(10, 12);
        assert_eq!(scroll.visible_range(), (0, 10));
    }

    #[test]
    fn scroll_to_top_resets() {
        let mut scroll = state(10, 4);
        scroll.scroll_down();
        scroll.scroll_to_top();
        assert_eq!(scroll.hidden(), (0, 6));
    }
}
