//! Forward-only paging over an owned list snapshot.

/// Page cursor over a snapshot of items.
///
/// Pages are 1-based. There is always at least one page, even for an empty
/// list. The cursor only moves forward; [`Pager::reset`] is the only way back.
#[derive(Debug, Clone)]
pub struct Pager<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
    total_pages: usize,
}

impl<T: Clone> Pager<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = Self::count_pages(items.len(), page_size);
        Self {
            items,
            page_size,
            current_page: 1,
            total_pages,
        }
    }

    fn count_pages(len: usize, page_size: usize) -> usize {
        len.div_ceil(page_size).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items on the current page.
    ///
    /// A cursor that points past the data clamps to the last page before
    /// slicing.
    pub fn current_page_items(&mut self) -> Vec<T> {
        if self.items.is_empty() {
            return Vec::new();
        }

        let mut start = (self.current_page - 1) * self.page_size;
        if start >= self.items.len() {
            self.total_pages = Self::count_pages(self.items.len(), self.page_size);
            self.current_page = self.total_pages;
            start = (self.current_page - 1) * self.page_size;
        }

        let end = (start + self.page_size).min(self.items.len());
        if start >= end {
            return Vec::new();
        }
        self.items[start..end].to_vec()
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Move to the next page. Ignored on the last page.
    pub fn advance(&mut self) {
        if self.has_next_page() {
            self.current_page += 1;
        }
    }

    /// Advance and return the new page, or nothing when already exhausted.
    pub fn load_next_page(&mut self) -> Vec<T> {
        if !self.has_next_page() {
            return Vec::new();
        }
        self.advance();
        self.current_page_items()
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Replace the snapshot and start over from page 1.
    pub fn update_data(&mut self, items: Vec<T>) {
        self.total_pages = Self::count_pages(items.len(), self.page_size);
        self.items = items;
        self.reset();
    }
}
