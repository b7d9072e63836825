//! View models shaped for the results template.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::domain::credential::Credential;
use crate::domain::exposure::ExposureCategory;
use crate::domain::query::QueryType;
use crate::pagination::PageControls;

/// One exposure label paired with its display category slug.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExposureTag {
    pub label: String,
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CredentialRow {
    pub email: String,
    pub breach_date: String,
    pub password: Option<String>,
    pub source: String,
    pub exposed: Vec<ExposureTag>,
}

impl From<&Credential> for CredentialRow {
    fn from(credential: &Credential) -> Self {
        Self {
            email: credential.email.clone(),
            breach_date: format_breach_date(&credential.breach_date),
            password: credential.password.clone(),
            source: credential.source.clone(),
            exposed: credential
                .exposed_data
                .iter()
                .map(|label| ExposureTag {
                    label: label.clone(),
                    category: ExposureCategory::classify(label).as_str(),
                })
                .collect(),
        }
    }
}

/// Render-ready snapshot of one page of results.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchView {
    pub query: String,
    pub query_type: QueryType,
    pub matches_found: usize,
    pub rows: Vec<CredentialRow>,
    pub controls: PageControls,
}

impl SearchView {
    pub fn is_empty(&self) -> bool {
        self.matches_found == 0
    }
}

/// The mutually exclusive display states of the results section; the
/// template renders exactly one of them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ResultsState {
    Error { message: String },
    Empty { query: String, query_type: QueryType },
    Results(SearchView),
}

impl ResultsState {
    /// Collapses a finished search into its display state.
    pub fn from_view(view: SearchView) -> Self {
        if view.is_empty() {
            Self::Empty {
                query: view.query,
                query_type: view.query_type,
            }
        } else {
            Self::Results(view)
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Reformats an ISO-8601-ish breach date as `YYYY/MM/DD`, keeping the
/// original string when it does not parse.
pub fn format_breach_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y/%m/%d").to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.format("%Y/%m/%d").to_string();
    }
    raw.to_string()
}
