//! Client-side data access for the heroes API.
//!
//! # Overview
//! `HeroService` issues list/search/get/add/update/delete requests against a
//! remote `api/heroes` collection, reports each outcome to a shared
//! `MessageService`, and turns every failure into a fallback value so callers
//! never handle transport errors themselves.
//!
//! # Design
//! - `HeroClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`, so the wire format is testable
//!   without a network.
//! - A `Transport` executes the round-trip. `ReqwestTransport` is provided
//!   behind the default `reqwest` feature.
//! - Each operation resolves exactly once to a single value; there is no
//!   streaming, retrying or cancellation.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod messages;
pub mod mock_heroes;
pub mod service;
pub mod transport;
pub mod types;

pub use client::{HeroClient, HEROES_PATH};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use messages::MessageService;
pub use mock_heroes::{HeroSource, MockHeroes};
pub use service::HeroService;
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use transport::Transport;
pub use types::{Hero, NewHero};
