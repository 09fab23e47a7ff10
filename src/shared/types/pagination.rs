//! Generic pagination over ordered, countable sources.
//!
//! [`paginate`] asks a [`PageSource`] for its total size and then for exactly
//! one slice at the computed offset, so no more than one page of rows is ever
//! materialized.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

/// Page size substituted when the caller asks for less than one item per page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Normalized page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Clamps the raw query values: page number below 1 becomes 1, page size
    /// below 1 becomes [`DEFAULT_PAGE_SIZE`].
    pub fn new(page_number: i64, page_size: i64) -> Self {
        let page_number = if page_number < 1 { 1 } else { page_number as u64 };
        let page_size = if page_size < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size as u64
        };
        Self {
            page_number,
            page_size,
        }
    }

    /// Row offset of the page, capped at `i64::MAX` so SQL backends can bind it.
    pub fn offset(&self) -> u64 {
        (self.page_number - 1)
            .saturating_mul(self.page_size)
            .min(i64::MAX as u64)
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub page_number: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, page_number: u64, page_size: u64) -> Self {
        let total_pages = total_count.div_ceil(page_size.max(1));
        Self {
            items,
            page_number,
            total_pages,
            total_count,
            has_previous_page: page_number > 1,
            has_next_page: page_number < total_pages,
        }
    }

    /// Converts the items while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            total_pages: self.total_pages,
            total_count: self.total_count,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
        }
    }
}

/// An ordered data source that can report its size and hand out slices.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;
    type Error: Send;

    async fn count(&self) -> Result<u64, Self::Error>;

    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<Self::Item>, Self::Error>;
}

/// Builds the requested page from `source`.
pub async fn paginate<S>(
    source: &S,
    page_number: i64,
    page_size: i64,
) -> Result<PaginatedResult<S::Item>, S::Error>
where
    S: PageSource + ?Sized,
{
    let request = PageRequest::new(page_number, page_size);
    let total_count = source.count().await?;
    let items = source.fetch(request.offset(), request.limit()).await?;
    Ok(PaginatedResult::new(
        items,
        total_count,
        request.page_number,
        request.page_size,
    ))
}

#[async_trait]
impl<T> PageSource for Vec<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;
    type Error = std::convert::Infallible;

    async fn count(&self) -> Result<u64, Self::Error> {
        Ok(self.len() as u64)
    }

    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<T>, Self::Error> {
        let start = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self.iter().skip(start).take(take).cloned().collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn numbers(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[tokio::test]
    async fn twenty_five_items_make_three_pages() {
        let source = numbers(25);

        let first = paginate(&source, 1, 10).await.unwrap();
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_count, 25);
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert!(!first.has_previous_page);
        assert!(first.has_next_page);

        let last = paginate(&source, 3, 10).await.unwrap();
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
        assert!(last.has_previous_page);
        assert!(!last.has_next_page);
    }

    #[tokio::test]
    async fn page_number_below_one_is_first_page() {
        let source = numbers(15);
        let zero = paginate(&source, 0, 5).await.unwrap();
        let negative = paginate(&source, -7, 5).await.unwrap();
        let first = paginate(&source, 1, 5).await.unwrap();
        assert_eq!(zero, first);
        assert_eq!(negative, first);
        assert_eq!(first.page_number, 1);
    }

    #[tokio::test]
    async fn page_size_below_one_uses_default() {
        let source = numbers(42);
        let zero = paginate(&source, 2, 0).await.unwrap();
        let default = paginate(&source, 2, 10).await.unwrap();
        assert_eq!(zero, default);
        assert_eq!(zero.items.len(), 10);
        assert_eq!(zero.total_pages, 5);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let source = numbers(5);
        let page = paginate(&source, 4, 10).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert!(page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[tokio::test]
    async fn empty_source_has_zero_pages() {
        let source: Vec<u32> = Vec::new();
        let page = paginate(&source, 1, 10).await.unwrap();
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_count, 0);
        assert!(!page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn total_pages_rounds_partial_page_up() {
        for (total, size, expected) in [(0, 10, 0), (1, 10, 1), (10, 10, 1), (11, 10, 2), (99, 7, 15)] {
            let page = PaginatedResult::<u8>::new(Vec::new(), total, 1, size);
            assert_eq!(page.total_pages, expected, "total={total} size={size}");
        }
    }

    #[test]
    fn offset_saturates_for_huge_page_numbers() {
        let request = PageRequest::new(i64::MAX, i64::MAX);
        assert_eq!(request.offset(), i64::MAX as u64);
    }

    /// Records the slice requested so the helper can be checked for over-fetching.
    struct CountingSource {
        rows: Vec<u32>,
        fetched: AtomicU64,
    }

    #[async_trait]
    impl PageSource for CountingSource {
        type Item = u32;
        type Error = std::convert::Infallible;

        async fn count(&self) -> Result<u64, Self::Error> {
            Ok(self.rows.len() as u64)
        }

        async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<u32>, Self::Error> {
            let rows = self.rows.fetch(offset, limit).await?;
            self.fetched.fetch_add(rows.len() as u64, Ordering::SeqCst);
            Ok(rows)
        }
    }

    #[tokio::test]
    async fn fetches_at_most_one_page_of_rows() {
        let source = CountingSource {
            rows: numbers(100),
            fetched: AtomicU64::new(0),
        };
        let page = paginate(&source, 3, 7).await.unwrap();
        assert_eq!(page.items, (15..=21).collect::<Vec<_>>());
        assert_eq!(source.fetched.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn map_keeps_metadata() {
        let page = PaginatedResult::new(vec![1, 2], 12, 2, 2).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_pages, 6);
        assert!(page.has_previous_page);
        assert!(page.has_next_page);
    }

    #[test]
    fn serializes_camel_case() {
        let page = PaginatedResult::new(vec!["a"], 1, 1, 10);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pageNumber"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["totalCount"], 1);
        assert_eq!(json["hasPreviousPage"], false);
        assert_eq!(json["hasNextPage"], false);
    }
}
