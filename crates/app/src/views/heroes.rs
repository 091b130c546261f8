use std::sync::Arc;

use models::{normalize_name, Hero, HeroRef, NewHero};
use service::HeroApi;
use tokio::task::JoinHandle;
use tracing::debug;

/// The hero list. Holds nothing until the first load completes.
pub struct HeroesView {
    api: Arc<dyn HeroApi>,
    heroes: Option<Vec<Hero>>,
}

impl HeroesView {
    pub fn new(api: Arc<dyn HeroApi>) -> Self {
        Self { api, heroes: None }
    }

    pub fn heroes(&self) -> Option<&[Hero]> {
        self.heroes.as_deref()
    }

    /// Load the list, replacing whatever is held when the response arrives.
    pub async fn activate(&mut self) {
        self.heroes = Some(self.api.list().await);
    }

    /// Add a hero by name. Blank names are ignored; a failed add leaves the list as is.
    pub async fn add(&mut self, name: &str) {
        let Ok(name) = normalize_name(name) else {
            debug!(event = "add_ignored", "blank hero name");
            return;
        };
        if let Some(hero) = self.api.add(NewHero::new(name)).await {
            self.heroes.get_or_insert_with(Vec::new).push(hero);
        }
    }

    /// Drop `hero` from the local list immediately, then fire the delete.
    ///
    /// The list is not restored if the backend call fails. The handle may be
    /// ignored; awaiting it only tells the caller the request finished.
    pub fn delete(&mut self, hero: &Hero) -> JoinHandle<Option<Hero>> {
        if let Some(heroes) = self.heroes.as_mut() {
            heroes.retain(|h| h.id != hero.id);
        }
        let api = Arc::clone(&self.api);
        let target = HeroRef::from(hero);
        tokio::spawn(async move { api.delete(target).await })
    }
}
