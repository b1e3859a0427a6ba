//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Pagination query parameters for list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-indexed). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page (max 100). Defaults to 20.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// Pagination metadata included in list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items.
    pub total: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl PaginationParams {
    /// Clamps `page` to at least 1 and `per_page` to `1..=100`.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, 100),
        }
    }

    /// Returns the requested page of `items` with its metadata.
    #[must_use]
    pub fn paginate<T: Clone>(&self, items: &[T]) -> (Vec<T>, PaginationMeta) {
        let Self { page, per_page } = self.clamped();
        let total = u32::try_from(items.len()).unwrap_or(u32::MAX);
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };

        let start = (page - 1).saturating_mul(per_page) as usize;
        let data = items
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();

        (
            data,
            PaginationMeta {
                page,
                per_page,
                total,
                total_pages,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: u32, per_page: u32) -> PaginationParams {
        PaginationParams { page, per_page }
    }

    #[test]
    fn clamps_out_of_range_values() {
        let p = params(0, 1000).clamped();
        assert_eq!((p.page, p.per_page), (1, 100));
        let p = params(3, 0).clamped();
        assert_eq!((p.page, p.per_page), (3, 1));
    }

    #[test]
    fn paginates_slices() {
        let items: Vec<u32> = (1..=45).collect();
        let (page, meta) = params(3, 20).paginate(&items);
        assert_eq!(page, (41..=45).collect::<Vec<_>>());
        assert_eq!(meta.total, 45);
        assert_eq!(meta.total_pages, 3);

        let (beyond, _) = params(9, 20).paginate(&items);
        assert!(beyond.is_empty());
    }

    #[test]
    fn empty_list_has_zero_pages() {
        let (page, meta) = params(1, 20).paginate::<u32>(&[]);
        assert!(page.is_empty());
        assert_eq!(meta.total_pages, 0);
    }
}
