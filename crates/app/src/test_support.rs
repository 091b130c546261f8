#![cfg(test)]
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use models::{Hero, HeroId, HeroRef, NewHero};
use service::{HeroApi, UpdateAck};
use tokio::sync::Semaphore;

/// In-memory stand-in for the HTTP service.
///
/// `fail_all` makes every call resolve to its default, which is exactly what
/// the real service does when the backend is unreachable.
pub struct FakeHeroApi {
    heroes: Mutex<Vec<Hero>>,
    added: Mutex<Vec<NewHero>>,
    updated: Mutex<Vec<Hero>>,
    searches: Mutex<Vec<String>>,
    calls: AtomicUsize,
    fail: AtomicBool,
    hold_deletes: AtomicBool,
    delete_gate: Semaphore,
}

impl FakeHeroApi {
    fn empty() -> Self {
        Self {
            heroes: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            searches: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
            hold_deletes: AtomicBool::new(false),
            delete_gate: Semaphore::new(0),
        }
    }

    pub fn seeded() -> Arc<Self> {
        let api = Self::empty();
        *api.heroes.lock().unwrap() = vec![
            Hero::new(11, "Dr Nice"),
            Hero::new(12, "Narco"),
            Hero::new(13, "Bombasto"),
            Hero::new(14, "Celeritas"),
        ];
        Arc::new(api)
    }

    pub fn failing() -> Arc<Self> {
        let api = Self::seeded();
        api.fail_all();
        api
    }

    pub fn fail_all(&self) { self.fail.store(true, Ordering::SeqCst); }

    pub fn hold_deletes(&self) { self.hold_deletes.store(true, Ordering::SeqCst); }

    pub fn release_deletes(&self) {
        self.hold_deletes.store(false, Ordering::SeqCst);
        self.delete_gate.add_permits(64);
    }

    pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
    pub fn added(&self) -> Vec<NewHero> { self.added.lock().unwrap().clone() }
    pub fn updated(&self) -> Vec<Hero> { self.updated.lock().unwrap().clone() }
    pub fn searches(&self) -> Vec<String> { self.searches.lock().unwrap().clone() }
    pub fn stored(&self) -> Vec<Hero> { self.heroes.lock().unwrap().clone() }

    fn begin(&self) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        !self.fail.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HeroApi for FakeHeroApi {
    async fn list(&self) -> Vec<Hero> {
        if !self.begin() { return Vec::new(); }
        self.stored()
    }

    async fn get(&self, id: HeroId) -> Option<Hero> {
        if !self.begin() { return None; }
        self.heroes.lock().unwrap().iter().find(|h| h.id == id).cloned()
    }

    async fn add(&self, hero: NewHero) -> Option<Hero> {
        self.added.lock().unwrap().push(hero.clone());
        if !self.begin() { return None; }
        let mut heroes = self.heroes.lock().unwrap();
        let id = heroes.iter().map(|h| h.id).max().unwrap_or(10) + 1;
        let created = Hero::new(id, hero.name);
        heroes.push(created.clone());
        Some(created)
    }

    async fn update(&self, hero: &Hero) -> Option<UpdateAck> {
        self.updated.lock().unwrap().push(hero.clone());
        if !self.begin() { return None; }
        let mut heroes = self.heroes.lock().unwrap();
        let slot = heroes.iter_mut().find(|h| h.id == hero.id)?;
        *slot = hero.clone();
        Some(UpdateAck::Null)
    }

    async fn delete(&self, hero: HeroRef) -> Option<Hero> {
        if self.hold_deletes.load(Ordering::SeqCst) {
            let _permit = self.delete_gate.acquire().await.ok()?;
        }
        if !self.begin() { return None; }
        let mut heroes = self.heroes.lock().unwrap();
        let pos = heroes.iter().position(|h| h.id == hero.id())?;
        Some(heroes.remove(pos))
    }

    async fn search(&self, term: &str) -> Vec<Hero> {
        let term = term.trim();
        if term.is_empty() { return Vec::new(); }
        self.searches.lock().unwrap().push(term.to_string());
        if !self.begin() { return Vec::new(); }
        let needle = term.to_lowercase();
        self.heroes
            .lock()
            .unwrap()
            .iter()
            .filter(|h| h.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
