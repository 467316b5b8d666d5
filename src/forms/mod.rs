//! Request payloads accepted by the API, validated before they become
//! domain values.

use serde::Deserialize;

use crate::pagination::{clamp_page, clamp_per_page};
use crate::repository::ReferenciaListQuery;

pub mod auth;
pub mod cliente;
pub mod produto;
pub mod referencia;
pub mod registro_tempo;
pub mod tarefa;
pub mod usuario;

/// `?page=&limit=&search=` triple shared by the list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub search: Option<String>,
}

impl ListParams {
    pub fn page(&self) -> usize {
        clamp_page(self.page)
    }

    pub fn per_page(&self) -> usize {
        clamp_per_page(self.limit)
    }

    /// Trimmed search term; blank input counts as no filter.
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn referencia_query(&self) -> ReferenciaListQuery {
        let mut query = ReferenciaListQuery::new().paginate(self.page(), self.per_page());
        if let Some(term) = self.search_term() {
            query = query.search(term);
        }
        query
    }
}

/// Comma-separated id list (`?ids=1,2,3`); malformed pieces are skipped.
pub fn parse_ids_csv(raw: &str) -> Vec<i32> {
    raw.split(',')
        .filter_map(|piece| piece.trim().parse::<i32>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_is_no_filter() {
        let params = ListParams {
            page: Some(2),
            limit: Some(10),
            search: Some("   ".into()),
        };
        assert_eq!(params.search_term(), None);
        assert_eq!(params.page(), 2);
        assert_eq!(params.per_page(), 10);
    }

    #[test]
    fn ids_csv_skips_garbage() {
        assert_eq!(parse_ids_csv("1, 2,x, 3,"), vec![1, 2, 3]);
        assert!(parse_ids_csv("").is_empty());
    }
}
