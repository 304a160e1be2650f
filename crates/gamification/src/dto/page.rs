use std::ops::Range;

use serde::Serialize;

const MAX_PAGE_SIZE: u32 = 100;

/// A 1-based page of a ranked list. Only valid requests can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Result<Self, String> {
        if page == 0 {
            return Err("page must be >= 1".to_string());
        }
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(format!("page size must be between 1 and {}", MAX_PAGE_SIZE));
        }
        Ok(Self { page, size })
    }

    /// Index range of this page within a list of `total` items, clipped to the list.
    fn range(&self, total: usize) -> Range<usize> {
        let start = ((self.page - 1) as usize)
            .saturating_mul(self.size as usize)
            .min(total);
        let end = start.saturating_add(self.size as usize).min(total);
        start..end
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, size: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    pub fn slice(all: &[T], request: PageRequest) -> Self {
        Self {
            items: all[request.range(all.len())].to_vec(),
            page: request.page,
            page_size: request.size,
            total_items: all.len(),
            total_pages: all.len().div_ceil(request.size as usize),
        }
    }
}
