use async_trait::async_trait;
use models::{Hero, HeroId, HeroRef, NewHero};

use crate::hero_service::{HeroService, UpdateAck};

/// The data-access seam the view layer depends on.
///
/// Every method resolves exactly once and never fails; absence or an empty
/// list is the only signal of trouble.
#[async_trait]
pub trait HeroApi: Send + Sync {
    async fn list(&self) -> Vec<Hero>;
    async fn get(&self, id: HeroId) -> Option<Hero>;
    async fn add(&self, hero: NewHero) -> Option<Hero>;
    async fn update(&self, hero: &Hero) -> Option<UpdateAck>;
    async fn delete(&self, hero: HeroRef) -> Option<Hero>;
    async fn search(&self, term: &str) -> Vec<Hero>;
}

#[async_trait]
impl HeroApi for HeroService {
    async fn list(&self) -> Vec<Hero> {
        self.get_heroes().await
    }

    async fn get(&self, id: HeroId) -> Option<Hero> {
        self.get_hero(id).await
    }

    async fn add(&self, hero: NewHero) -> Option<Hero> {
        self.add_hero(&hero).await
    }

    async fn update(&self, hero: &Hero) -> Option<UpdateAck> {
        self.update_hero(hero).await
    }

    async fn delete(&self, hero: HeroRef) -> Option<Hero> {
        self.delete_hero(hero).await
    }

    async fn search(&self, term: &str) -> Vec<Hero> {
        self.search_heroes(term).await
    }
}
