use crate::search::QueryError;
use std::num::NonZeroUsize;

/// Number of records per page. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub const DEFAULT: PageSize = match NonZeroUsize::new(12) {
        Some(n) => PageSize(n),
        None => unreachable!(),
    };

    pub fn new(size: usize) -> Result<Self, QueryError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(QueryError::InvalidPageSize(size))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageIndex(NonZeroUsize);

impl PageIndex {
    pub const FIRST: PageIndex = PageIndex(NonZeroUsize::MIN);

    pub fn new(index: usize) -> Result<Self, QueryError> {
        NonZeroUsize::new(index)
            .map(Self)
            .ok_or_else(|| QueryError::InvalidPageIndex(index.to_string()))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }
}

impl Default for PageIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

/// One window over an ordered result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub index: PageIndex,
    pub size: PageSize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The query matched records but the index lies beyond the last page.
    pub fn is_past_end(&self) -> bool {
        self.items.is_empty() && self.total_items > 0
    }

    pub fn previous(&self) -> Option<PageIndex> {
        match self.index.get() {
            1 => None,
            n => PageIndex::new(n - 1).ok(),
        }
    }

    pub fn next(&self) -> Option<PageIndex> {
        let n = self.index.get();
        if n < self.total_pages {
            PageIndex::new(n + 1).ok()
        } else {
            None
        }
    }

    /// 1-based position of the first item on this page, for "Showing a-b of n".
    pub fn first_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.index.get() - 1) * self.size.get() + 1
        }
    }

    pub fn last_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_position() + self.items.len() - 1
        }
    }
}

/// Slices `records` into the window for `index`.
///
/// Indices past the last page yield an empty `items`; clamping is left to the
/// caller.
pub fn paginate<T: Clone>(records: &[T], size: PageSize, index: PageIndex) -> Page<T> {
    let total_items = records.len();
    let total_pages = total_items.div_ceil(size.get());
    let start = (index.get() - 1).saturating_mul(size.get());

    let items = records
        .iter()
        .skip(start)
        .take(size.get())
        .cloned()
        .collect();

    Page {
        items,
        index,
        size,
        total_items,
        total_pages,
    }
}
