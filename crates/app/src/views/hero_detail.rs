use std::sync::Arc;

use models::{Hero, HeroId};
use service::HeroApi;
use tracing::{debug, warn};

use crate::location::Navigation;
use crate::router::RouteMatch;

/// Editor for a single hero, either handed in by a parent or loaded by route id.
pub struct HeroDetailView {
    api: Arc<dyn HeroApi>,
    hero: Option<Hero>,
}

impl HeroDetailView {
    pub fn new(api: Arc<dyn HeroApi>) -> Self {
        Self { api, hero: None }
    }

    /// Pre-supplied hero; `activate` will not fetch.
    pub fn with_hero(api: Arc<dyn HeroApi>, hero: Hero) -> Self {
        Self { api, hero: Some(hero) }
    }

    pub fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    /// Load the hero named by the route's `id` unless one was supplied.
    /// Whatever `get` resolves to is kept, including nothing.
    pub async fn activate(&mut self, route: &RouteMatch) {
        if self.hero.is_some() {
            return;
        }
        let raw = route.param("id").unwrap_or_default();
        let id = match raw.trim().parse::<HeroId>() {
            Ok(id) => id,
            Err(e) => {
                warn!(event = "bad_route_id", id = raw, error = %e, "detail route id is not a number");
                return;
            }
        };
        self.hero = self.api.get(id).await;
    }

    /// Edit the held hero's name. Returns false when there is nothing to edit.
    pub fn rename(&mut self, name: &str) -> bool {
        match self.hero.as_mut() {
            Some(hero) => {
                hero.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Push the held hero to the backend, then go back whatever the outcome.
    pub async fn save(&mut self) -> Navigation {
        if let Some(hero) = self.hero.as_ref() {
            let ack = self.api.update(hero).await;
            debug!(event = "saved", id = hero.id, acknowledged = ack.is_some());
        }
        self.go_back()
    }

    pub fn go_back(&self) -> Navigation {
        Navigation::Back
    }
}
