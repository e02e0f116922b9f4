//! Page metadata for list endpoints

use serde::Serialize;

/// Page metadata computed from a requested page, page size and total count.
///
/// A page past the end is clamped to the last page and anything below one
/// becomes the first page, so `offset` never skips past existing records
/// unless there are none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub total_count: usize,
    pub page: usize,
    pub per_page: usize,
    pub page_count: usize,
}

impl PageMeta {
    /// Build page metadata.
    ///
    /// `per_page` of zero falls back to `default_limit`; values above
    /// `max_limit` are capped.
    pub fn new(
        page: usize,
        per_page: usize,
        total_count: usize,
        default_limit: usize,
        max_limit: usize,
    ) -> Self {
        let mut per_page = if per_page == 0 { default_limit } else { per_page };
        per_page = per_page.clamp(1, max_limit.max(1));

        let page_count = total_count.div_ceil(per_page);
        let page = page.min(page_count).max(1);

        Self {
            total_count,
            page,
            per_page,
            page_count,
        }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    pub fn limit(&self) -> usize {
        self.per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let meta = PageMeta::new(1, 10, 25, 20, 100);

        assert_eq!(meta.page_count, 3);
        assert_eq!(meta.offset(), 0);
        assert_eq!(meta.limit(), 10);
    }

    #[test]
    fn test_default_limit_when_unset() {
        let meta = PageMeta::new(1, 0, 25, 20, 100);
        assert_eq!(meta.per_page, 20);
        assert_eq!(meta.page_count, 2);
    }

    #[test]
    fn test_limit_capped() {
        let meta = PageMeta::new(1, 500, 25, 20, 100);
        assert_eq!(meta.per_page, 100);
    }

    #[test]
    fn test_page_clamped_to_last() {
        let meta = PageMeta::new(9, 10, 25, 20, 100);
        assert_eq!(meta.page, 3);
        assert_eq!(meta.offset(), 20);
    }

    #[test]
    fn test_page_zero_is_first() {
        let meta = PageMeta::new(0, 10, 25, 20, 100);
        assert_eq!(meta.page, 1);
    }

    #[test]
    fn test_empty_result_set() {
        let meta = PageMeta::new(3, 10, 0, 20, 100);

        assert_eq!(meta.page_count, 0);
        assert_eq!(meta.page, 1);
        assert_eq!(meta.offset(), 0);
    }
}
