//! Marker-based pagination shared by every listing call.

use std::future::Future;

use crate::error::SourceError;

/// Upper bound on pages fetched for a single listing.
pub const MAX_PAGES: usize = 1000;

/// One page of a paged listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Marker for the next page. `None` or empty means this was the last.
    pub marker: Option<String>,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self { items, marker: None }
    }
}

/// Fetch every page of a listing.
///
/// `fetch` receives the marker of the page to load (`None` for the first)
/// and the items of all pages are returned in order.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>, SourceError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, SourceError>>,
{
    let mut items = Vec::new();
    let mut marker: Option<String> = None;

    for page_no in 1..=MAX_PAGES {
        let page = fetch(marker.clone()).await?;
        items.extend(page.items);

        match page.marker.filter(|m| !m.is_empty()) {
            None => {
                tracing::trace!(pages = page_no, items = items.len(), "listing complete");
                return Ok(items);
            }
            Some(next) if marker.as_deref() == Some(next.as_str()) => {
                return Err(SourceError::StalledPagination { marker: next });
            }
            Some(next) => marker = Some(next),
        }
    }

    Err(SourceError::TooManyPages { limit: MAX_PAGES })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_single_page() {
        let items = collect_pages(|_| async { Ok(Page::last(vec![1, 2, 3])) })
            .await
            .unwrap();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_follows_markers_in_order() {
        let mut seen = Vec::new();
        let items = collect_pages(|marker| {
            seen.push(marker.clone());
            async move {
                Ok(match marker.as_deref() {
                    None => Page { items: vec!["a", "b"], marker: Some("m1".into()) },
                    Some("m1") => Page { items: vec!["c"], marker: Some("m2".into()) },
                    Some(_) => Page { items: vec!["d"], marker: Some(String::new()) },
                })
            }
        })
        .await
        .unwrap();

        assert_eq!(items, vec!["a", "b", "c", "d"]);
        assert_eq!(seen, vec![None, Some("m1".to_string()), Some("m2".to_string())]);
    }

    #[tokio::test]
    async fn test_error_stops_listing() {
        let result: Result<Vec<u8>, _> = collect_pages(|marker| async move {
            match marker {
                None => Ok(Page { items: vec![1], marker: Some("next".into()) }),
                Some(_) => Err(SourceError::Api {
                    operation: "DescribeDBParameters",
                    message: "throttled".into(),
                }),
            }
        })
        .await;
        assert!(matches!(result, Err(SourceError::Api { .. })));
    }

    #[tokio::test]
    async fn test_repeated_marker_is_rejected() {
        let result: Result<Vec<u8>, _> = collect_pages(|_| async {
            Ok(Page { items: vec![1], marker: Some("same".into()) })
        })
        .await;
        match result {
            Err(SourceError::StalledPagination { marker }) => assert_eq!(marker, "same"),
            other => panic!("expected stalled pagination, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_page_limit() {
        let mut calls = 0usize;
        let result: Result<Vec<usize>, _> = collect_pages(|_| {
            calls += 1;
            let n = calls;
            async move { Ok(Page { items: vec![n], marker: Some(format!("m{}", n)) }) }
        })
        .await;
        assert!(matches!(result, Err(SourceError::TooManyPages { limit: MAX_PAGES })));
        assert_eq!(calls, MAX_PAGES);
    }
}
