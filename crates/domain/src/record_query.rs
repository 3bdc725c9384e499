use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Optional filters applied to record listings and exports.
///
/// `start_time`/`end_time` are inclusive bounds compared as opaque sortable
/// strings, matching the stored `DATETIME` text representation.
#[derive(Debug, Clone, Default)]
pub struct RecordFilters {
    pub student_id: Option<String>,
    /// Substring match against the stored (canonical) url column.
    pub domain: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Tri-state: `Some(true)` only blocked rows, `Some(false)` only clean
    /// rows, `None` both.
    pub blacklisted: Option<bool>,
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Clamp to sane bounds: pages are 1-based, page size is capped.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(request: PageRequest, total_items: u64) -> Self {
        Self {
            current_page: request.page,
            page_size: request.page_size,
            total_items,
            total_pages: total_items.div_ceil(request.page_size as u64),
        }
    }
}
