use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub type HeroId = i64;

/// A hero as stored by the backend. `id` is assigned on creation and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

impl Hero {
    pub fn new(id: HeroId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Payload for creating a hero; the server fills in the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Either a full hero or just its id. Delete accepts both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeroRef {
    Hero(Hero),
    Id(HeroId),
}

impl HeroRef {
    pub fn id(&self) -> HeroId {
        match self {
            HeroRef::Hero(h) => h.id,
            HeroRef::Id(id) => *id,
        }
    }
}

impl From<Hero> for HeroRef {
    fn from(h: Hero) -> Self { HeroRef::Hero(h) }
}

impl From<&Hero> for HeroRef {
    fn from(h: &Hero) -> Self { HeroRef::Hero(h.clone()) }
}

impl From<HeroId> for HeroRef {
    fn from(id: HeroId) -> Self { HeroRef::Id(id) }
}

/// Trim a user-entered name; blank input is rejected.
pub fn normalize_name(raw: &str) -> Result<String, ModelError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ModelError::Validation("hero name must not be blank".into()));
    }
    Ok(name.to_string())
}
