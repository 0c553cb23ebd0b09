//! Common types

use serde::{Deserialize, Serialize};

/// Zero-based page request handed to repositories.
///
/// Callers of the service layer think in 1-based page numbers; the service
/// normalizes before a `PageRequest` is built, so `page` here is always a
/// valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    /// Row offset for a LIMIT/OFFSET query.
    pub fn offset(&self) -> i64 {
        self.page * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: super::constants::DEFAULT_PAGE_SIZE }
    }
}

/// One page of results together with total-count metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: i64) -> Self {
        let total_pages = if request.size > 0 {
            (total_items + request.size - 1) / request.size
        } else {
            0
        };
        Self {
            items,
            page: request.page,
            size: request.size,
            total_items,
            total_pages,
        }
    }

    /// Converts the page contents while keeping the paging metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 30);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(0, 10), 21);
        assert_eq!(page.total_pages, 3);

        let exact = Page::new(vec![1], PageRequest::new(0, 10), 20);
        assert_eq!(exact.total_pages, 2);

        let empty = Page::<i32>::new(vec![], PageRequest::new(0, 10), 0);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn page_serializes_with_metadata() {
        let page = Page::new(vec![1, 2], PageRequest::new(0, 2), 4);
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"total_items\":4"));
        assert!(json.contains("\"total_pages\":2"));
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Page::new(vec![1, 2], PageRequest::new(1, 2), 5);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.total_items, 5);
        assert_eq!(mapped.total_pages, 3);
    }
}
