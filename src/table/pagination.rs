//! Pagination state and page arithmetic

/// Page sizes offered by the page-size select
pub const PAGE_SIZE_OPTIONS: [usize; 7] = [3, 5, 10, 15, 20, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// Zero-based index of the visible page
    pub page_index: usize,
    /// Rows per page, always at least 1
    pub page_size: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Index of the first row on the visible page
    pub fn first_row(&self) -> usize {
        self.page_index * self.page_size
    }

    /// Same rows per page, with `page_index` clamped to the available pages
    pub fn with_page_index(self, page_index: usize, row_count: usize) -> Self {
        let last = page_count(row_count, self.page_size) - 1;
        Self {
            page_index: page_index.min(last),
            ..self
        }
    }

    /// New page size, keeping the previously first visible row on screen
    pub fn with_page_size(self, page_size: usize, row_count: usize) -> Self {
        let page_size = page_size.max(1);
        let page_index = self.first_row() / page_size;
        Self {
            page_index,
            page_size,
        }
        .with_page_index(page_index, row_count)
    }

    /// Row range `[start, end)` shown for `row_count` rows
    pub fn visible_range(&self, row_count: usize) -> (usize, usize) {
        let start = self.first_row().min(row_count);
        let end = (start + self.page_size).min(row_count);
        (start, end)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Number of pages for `row_count` rows; an empty table still has one page
pub fn page_count(row_count: usize, page_size: usize) -> usize {
    row_count.div_ceil(page_size.max(1)).max(1)
}

/// The preset after (or before) `current` in the offered list
///
/// An off-list size moves to the nearest preset in the requested direction.
pub fn step_page_size(current: usize, options: &[usize], forward: bool) -> usize {
    let next = if forward {
        options.iter().copied().find(|&o| o > current)
    } else {
        options.iter().rev().copied().find(|&o| o < current)
    };
    next.unwrap_or(current)
}
