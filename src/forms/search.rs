use serde::Deserialize;
use validator::Validate;

use crate::domain::query::QueryType;
use crate::forms::FormError;

/// Search submitted from the landing page query string or the JSON API.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchForm {
    #[validate(length(max = 320))]
    pub q: String,
    pub page: Option<usize>,
}

impl SearchForm {
    pub fn new(q: impl Into<String>, page: Option<usize>) -> Self {
        Self { q: q.into(), page }
    }

    /// Trims and classifies the query, rejecting anything that is neither a
    /// syntactically valid email address nor a DNS domain. No network call
    /// is made for rejected input.
    pub fn parsed_query(&self) -> Result<(String, QueryType), FormError> {
        self.validate()?;

        let query = self.q.trim();
        if query.is_empty() {
            return Err(FormError::EmptyQuery);
        }

        QueryType::detect(query)
            .map(|query_type| (query.to_string(), query_type))
            .ok_or(FormError::InvalidQuery)
    }
}
