//! Search session driving the pager through explicit commands.
//!
//! Every UI event maps to one command returning a render-ready view, so the
//! calling layer never touches pager state directly and no module-level
//! state exists.

use crate::domain::credential::Credential;
use crate::domain::query::QueryType;
use crate::dto::search::{CredentialRow, SearchView};
use crate::forms::search::SearchForm;
use crate::pagination::{DEFAULT_PAGE_SIZE, ResultPager};
use crate::provider::CredentialSearcher;
use crate::services::ServiceResult;

/// Owns the result list of the most recent search and its pager.
///
/// Constructed per search flow; issuing a new search replaces the held
/// results wholesale. Navigation commands before any search yield an empty
/// view.
pub struct ResultBrowser<'a> {
    provider: &'a dyn CredentialSearcher,
    pager: ResultPager<Credential>,
    query: String,
    query_type: Option<QueryType>,
    matches_found: usize,
}

impl<'a> ResultBrowser<'a> {
    pub fn new(provider: &'a dyn CredentialSearcher) -> Self {
        Self::with_page_size(provider, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(provider: &'a dyn CredentialSearcher, page_size: usize) -> Self {
        Self {
            provider,
            pager: ResultPager::new(page_size),
            query: String::new(),
            query_type: None,
            matches_found: 0,
        }
    }

    /// Validates the query, runs the search and lands on page 1.
    pub async fn on_search_submitted(&mut self, form: &SearchForm) -> ServiceResult<SearchView> {
        let (query, _) = form.parsed_query()?;

        let results = self.provider.search(&query).await?;

        self.query = results.query;
        self.query_type = Some(results.query_type);
        self.matches_found = results.matches_found;
        self.pager.reset(results.credentials);

        Ok(self.view())
    }

    /// Jumps to a page offered by the control descriptor; out-of-range
    /// numbers leave the view unchanged.
    pub fn on_page_requested(&mut self, page: usize) -> SearchView {
        self.pager.go_to(page);
        self.view()
    }

    pub fn on_next_requested(&mut self) -> SearchView {
        self.pager.next();
        self.view()
    }

    pub fn on_prev_requested(&mut self) -> SearchView {
        self.pager.prev();
        self.view()
    }

    fn view(&self) -> SearchView {
        SearchView {
            query: self.query.clone(),
            query_type: self.query_type.unwrap_or(QueryType::Domain),
            matches_found: self.matches_found,
            rows: self.pager.current_slice().iter().map(CredentialRow::from).collect(),
            controls: self.pager.controls(),
        }
    }
}
