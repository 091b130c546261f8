//! Data-access layer for the heroes backend.
//! - `HeroService` turns each domain operation into exactly one HTTP call.
//! - Failures never reach callers: `handle_error` logs them and substitutes a default.
//! - `MessageService` keeps the developer-facing log lines both paths produce.

pub mod errors;
pub mod messages;
pub mod fallback;
pub mod hero_service;
pub mod api;

pub use api::HeroApi;
pub use errors::ServiceError;
pub use fallback::handle_error;
pub use hero_service::{HeroService, UpdateAck};
pub use messages::MessageService;
