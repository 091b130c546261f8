//! Domain records shared by the data-access service and the view layer.
//! - `Hero` is the only managed entity; ids are assigned by the server.
//! - `NewHero` is the add payload, `HeroRef` accepts either a hero or a bare id.

pub mod errors;
pub mod hero;

pub use hero::{normalize_name, Hero, HeroId, HeroRef, NewHero};
