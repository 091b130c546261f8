use std::sync::Arc;

use models::Hero;
use service::HeroApi;

/// Name search box with its latest results.
pub struct HeroSearchView {
    api: Arc<dyn HeroApi>,
    term: Option<String>,
    results: Vec<Hero>,
}

impl HeroSearchView {
    pub fn new(api: Arc<dyn HeroApi>) -> Self {
        Self { api, term: None, results: Vec::new() }
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn results(&self) -> &[Hero] {
        &self.results
    }

    /// Run a search unless `term` repeats the previous one.
    /// Returns whether a search was issued.
    pub async fn search(&mut self, term: &str) -> bool {
        if self.term.as_deref() == Some(term) {
            return false;
        }
        self.term = Some(term.to_string());
        self.results = self.api.search(term).await;
        true
    }
}
