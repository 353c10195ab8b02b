//! Filtered, paginated projection of the task collection.
//!
//! # Responsibility
//! - Derive the currently displayed page from the full collection plus
//!   transient view inputs (search text, status filter, page number).
//! - Provide the page-reset policy applied when those inputs change.
//!
//! # Invariants
//! - `project_page` is pure and stateless; identical inputs always yield
//!   identical output.
//! - Relative task order is preserved through filtering and slicing.
//! - Out-of-range pages yield an empty page, never an error; clamping is
//!   the caller's concern via [`PageCursor`].

use crate::model::task::Task;

/// Transient view inputs for one projection call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Case-insensitive substring match against task titles. Empty means
    /// no title filtering.
    pub search_title: String,
    /// Exact status-id match. Empty means all statuses.
    pub status: String,
    /// 1-based page number.
    pub page: u32,
    /// Tasks per page.
    pub page_size: u32,
}

impl PageQuery {
    /// First page with no filters.
    pub fn first_page(page_size: u32) -> Self {
        Self {
            search_title: String::new(),
            status: String::new(),
            page: 1,
            page_size,
        }
    }
}

/// One displayable page of tasks plus pagination arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPage<'a> {
    /// Tasks on the requested page, in collection order.
    pub items: Vec<&'a Task>,
    /// Number of tasks surviving the filters, across all pages.
    pub matched: usize,
    /// `ceil(matched / page_size)`; zero when nothing matched.
    pub total_pages: u32,
}

impl TaskPage<'_> {
    /// Whether the filters matched nothing at all.
    ///
    /// Callers render this as a "no results" state, not an error.
    pub fn is_no_results(&self) -> bool {
        self.matched == 0
    }
}

/// Derives the page of tasks selected by `query`.
///
/// A task survives filtering iff its status equals `query.status` (or the
/// filter is empty) and its title contains `query.search_title` ignoring
/// case (or the search is empty). The surviving sequence is then sliced to
/// the requested page. `page == 0` or `page_size == 0` yields an empty
/// page.
pub fn project_page<'a>(tasks: &'a [Task], query: &PageQuery) -> TaskPage<'a> {
    let search = query.search_title.to_lowercase();
    let filtered: Vec<&Task> = tasks
        .iter()
        .filter(|task| {
            (query.status.is_empty() || task.status == query.status)
                && (search.is_empty() || task.title.to_lowercase().contains(&search))
        })
        .collect();

    let matched = filtered.len();
    let total_pages = if query.page_size == 0 {
        0
    } else {
        (matched as u32).div_ceil(query.page_size)
    };

    if query.page == 0 || query.page_size == 0 {
        return TaskPage {
            items: Vec::new(),
            matched,
            total_pages,
        };
    }

    let start = (query.page as usize - 1) * query.page_size as usize;
    let end = (start + query.page_size as usize).min(matched);
    let items = if start < matched {
        filtered[start..end].to_vec()
    } else {
        Vec::new()
    };

    TaskPage {
        items,
        matched,
        total_pages,
    }
}

/// Transient page selection owned by the presentation layer.
///
/// The projection itself has no memory; this cursor implements the reset
/// policy around it: back to page 1 whenever a filter input changes, and
/// whenever the unfiltered collection shrinks to a single page (so bulk
/// deletion cannot strand the view on a now-empty page).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    /// Starts on page 1.
    pub fn new() -> Self {
        Self { page: 1 }
    }

    /// Current 1-based page number.
    pub fn current(&self) -> u32 {
        self.page
    }

    /// Jumps to an explicitly selected page.
    pub fn select(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Resets to page 1; call when search text or status filter changed.
    pub fn filter_changed(&mut self) {
        self.page = 1;
    }

    /// Resets to page 1 when the whole collection fits on one page; call
    /// after the collection size changed.
    pub fn collection_resized(&mut self, total_tasks: usize, page_size: u32) {
        if total_tasks <= page_size as usize {
            self.page = 1;
        }
    }
}
