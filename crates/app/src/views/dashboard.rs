use std::sync::Arc;

use models::Hero;
use service::HeroApi;

/// Number of heroes featured on the dashboard.
pub const TOP_HEROES: usize = 4;

/// Landing page showing a handful of featured heroes.
pub struct DashboardView {
    api: Arc<dyn HeroApi>,
    heroes: Vec<Hero>,
}

impl DashboardView {
    pub fn new(api: Arc<dyn HeroApi>) -> Self {
        Self { api, heroes: Vec::new() }
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Featured heroes are the second through fifth of the list.
    pub async fn activate(&mut self) {
        self.heroes = self.api.list().await.into_iter().skip(1).take(TOP_HEROES).collect();
    }
}
