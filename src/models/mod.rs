//! Domain models for Libris entities

pub mod author;
pub mod book;
pub mod branch;
pub mod member;
pub mod publisher;
pub mod schedule;
pub mod staff;
pub mod transaction;

use serde::Deserialize;
use utoipa::IntoParams;

/// Common list query parameters (substring search + pagination)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Substring filter applied to the resource's name field
    pub search: Option<String>,
    /// Page number, 1-based (default: 1)
    pub page: Option<i64>,
    /// Items per page (default: 10)
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Resolve `(limit, offset)` for the SQL window
    pub fn window(&self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(10).max(1);
        (limit, (page - 1) * limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults_to_first_page_of_ten() {
        let q = ListQuery::default();
        assert_eq!(q.window(), (10, 0));
    }

    #[test]
    fn window_offsets_past_earlier_pages() {
        let q = ListQuery {
            search: None,
            page: Some(2),
            limit: Some(2),
        };
        // page 2 with limit 2 covers items 3-4
        assert_eq!(q.window(), (2, 2));
    }

    #[test]
    fn window_clamps_nonsense_input() {
        let q = ListQuery {
            search: None,
            page: Some(0),
            limit: Some(-5),
        };
        assert_eq!(q.window(), (1, 0));
    }
}
