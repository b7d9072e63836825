use serde::Serialize;

/// Number of result rows shown per page unless a caller picks another size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages <= 7 {
        return (1..=total_pages).map(Some).collect();
    }

    let mut pages = Vec::new();

    if current_page <= 3 {
        pages.extend((1..=4).map(Some));
        pages.push(None);
        pages.push(Some(total_pages));
    } else if current_page >= total_pages - 2 {
        pages.push(Some(1));
        pages.push(None);
        pages.extend((total_pages - 3..=total_pages).map(Some));
    } else {
        pages.push(Some(1));
        pages.push(None);
        pages.extend((current_page - 1..=current_page + 1).map(Some));
        pages.push(None);
        pages.push(Some(total_pages));
    }

    pages
}

/// Render-ready description of the pagination controls for the current page.
///
/// `pages` lists the page buttons in display order; `None` marks an ellipsis
/// standing in for an omitted range. The active button is the one equal to
/// `page`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageControls {
    pub total_pages: usize,
    pub page: usize,
    pub can_prev: bool,
    pub can_next: bool,
    pub range_label: String,
    pub pages: Vec<Option<usize>>,
}

/// Owns the full result list for one executed search and maps
/// `(items, page_size, current_page)` to the visible slice plus the
/// control descriptor.
///
/// Navigation never fails; out-of-range requests are ignored.
#[derive(Debug, Clone)]
pub struct ResultPager<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> ResultPager<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Replaces the full item list and returns to the first page.
    pub fn reset(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = 1;
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Jumps to `page` when it is within `1..=total_pages`, otherwise a no-op.
    pub fn go_to(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
        }
    }

    pub fn next(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// The items visible on the current page, in response order.
    pub fn current_slice(&self) -> &[T] {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        self.items.get(start..end).unwrap_or(&[])
    }

    pub fn controls(&self) -> PageControls {
        let total = self.items.len();
        let total_pages = self.total_pages();

        let range_label = if total == 0 {
            "0-0 of 0".to_string()
        } else {
            let start = (self.current_page - 1) * self.page_size + 1;
            let end = (self.current_page * self.page_size).min(total);
            format!("{start}-{end} of {total}")
        };

        PageControls {
            total_pages,
            page: self.current_page,
            can_prev: self.current_page > 1,
            can_next: self.current_page < total_pages,
            range_label,
            pages: page_window(total_pages, self.current_page),
        }
    }
}

impl<T> Default for ResultPager<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
