//! Presentation layer: a static route table, browser-style history, and the
//! view components that hold local state on top of a shared `HeroApi`.

pub mod router;
pub mod location;
pub mod views;
pub mod shell;
#[cfg(test)]
pub mod test_support;

pub use location::{Location, Navigation};
pub use router::{Route, RouteMatch, Router};
pub use shell::{App, Page};
