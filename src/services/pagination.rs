/// Comments shown per page of the top-level thread.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Tracks the current page of the top-level thread and derives the visible
/// window over it.
///
/// Pages are 1-indexed. The paginator never owns the comments; the slice is
/// recomputed from the current forest on every call, so any change to the
/// top level's length or order is picked up automatically. Jumping to an
/// out-of-range page is not an error — it just yields an empty window.
#[derive(Debug, Clone)]
pub struct Paginator {
    page: usize,
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total: usize) -> usize {
        (total + self.page_size - 1) / self.page_size
    }

    /// Accepts any page number; out-of-range pages show nothing rather
    /// than failing.
    pub fn go_to(&mut self, page: usize) {
        self.page = page;
    }

    pub fn next_page(&mut self, total: usize) {
        if self.page < self.total_pages(total) {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// The half-open window `[(page-1)*size, page*size)` over `items`,
    /// empty when the page is out of range.
    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        // page * size can exceed usize for absurd page numbers; those are
        // just empty windows like any other out-of-range page
        let start = match self
            .page
            .checked_sub(1)
            .and_then(|page| page.checked_mul(self.page_size))
        {
            Some(start) => start,
            None => return &[],
        };
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
