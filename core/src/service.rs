//! Hero data-access service.
//!
//! # Design
//! Every live operation sends exactly one request and never surfaces an
//! error. On success it reports to the shared `MessageService` and returns
//! the payload unchanged. On failure `handle_error` reports the raw error
//! through `tracing`, appends `<operation> failed: <message>` to the message
//! log and substitutes the fallback chosen by the operation.

use std::sync::Arc;

use tracing::error;

use crate::client::HeroClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::messages::MessageService;
use crate::mock_heroes::{HeroSource, MockHeroes};
use crate::transport::Transport;
use crate::types::{Hero, NewHero};

/// Response parser signature shared by all `HeroClient::parse_*` methods.
type Parse<R> = fn(&HeroClient, HttpResponse) -> Result<R, ApiError>;

pub struct HeroService<T> {
    client: HeroClient,
    transport: T,
    messages: Arc<MessageService>,
    seed: Arc<dyn HeroSource>,
}

impl<T: Transport> HeroService<T> {
    pub fn new(client: HeroClient, transport: T, messages: Arc<MessageService>) -> Self {
        Self {
            client,
            transport,
            messages,
            seed: Arc::new(MockHeroes::default()),
        }
    }

    /// Replace the seed data behind the offline variants.
    pub fn with_seed(mut self, seed: Arc<dyn HeroSource>) -> Self {
        self.seed = seed;
        self
    }

    pub fn messages(&self) -> &Arc<MessageService> {
        &self.messages
    }

    /// GET heroes whose name contains `term`. A blank term resolves to an
    /// empty list without touching the network.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        let request = self.client.build_search_heroes(term);
        self.fetch(request, HeroClient::parse_search_heroes)
            .await
            .inspect(|heroes| {
                if heroes.is_empty() {
                    self.log(format!("no heroes matching \"{term}\""));
                } else {
                    self.log(format!("found heroes matching \"{term}\""));
                }
            })
            .unwrap_or_else(self.handle_error("searchHeroes".into(), Vec::new()))
    }

    pub async fn get_heroes(&self) -> Vec<Hero> {
        let request = self.client.build_list_heroes();
        self.fetch(request, HeroClient::parse_list_heroes)
            .await
            .unwrap_or_else(self.handle_error("getHeroes".into(), Vec::new()))
    }

    /// GET a hero by id. A missing hero (404) resolves to `None`.
    pub async fn get_hero(&self, id: u32) -> Option<Hero> {
        let request = self.client.build_get_hero(id);
        self.fetch(request, HeroClient::parse_get_hero)
            .await
            .inspect(|_| self.log(format!("fetched hero id={id}")))
            .map(Some)
            .unwrap_or_else(self.handle_error(format!("getHero id={id}"), None))
    }

    /// POST a new hero; resolves to the stored record with its assigned id.
    pub async fn add_hero(&self, hero: &NewHero) -> Option<Hero> {
        self.try_add_hero(hero)
            .await
            .inspect(|created| self.log(format!("added hero w/ id={}", created.id)))
            .map(Some)
            .unwrap_or_else(self.handle_error("addHero".into(), None))
    }

    /// PUT the hero; resolves to the server's opaque acknowledgment.
    pub async fn update_hero(&self, hero: &Hero) -> Option<serde_json::Value> {
        self.try_update_hero(hero)
            .await
            .inspect(|_| self.log(format!("updated hero id={}", hero.id)))
            .map(Some)
            .unwrap_or_else(self.handle_error("updateHero".into(), None))
    }

    /// DELETE a hero; resolves to the server's copy of it, if it sent one.
    pub async fn delete_hero(&self, id: u32) -> Option<Hero> {
        let request = self.client.build_delete_hero(id);
        self.fetch(request, HeroClient::parse_delete_hero)
            .await
            .inspect(|_| self.log(format!("deleted hero id={id}")))
            .unwrap_or_else(self.handle_error("deleteHero".into(), None))
    }

    /// Superseded by `get_heroes`: reads the seed provider instead of the API.
    pub fn get_heroes_from_seed(&self) -> Vec<Hero> {
        let heroes = self.seed.heroes();
        self.log("fetched heroes");
        heroes
    }

    /// Superseded by `get_hero`: reads the seed provider instead of the API.
    pub fn get_hero_from_seed(&self, id: u32) -> Option<Hero> {
        let hero = self.seed.hero(id);
        self.log(format!("fetched hero id={id}"));
        hero
    }

    async fn try_add_hero(&self, hero: &NewHero) -> Result<Hero, ApiError> {
        let request = self.client.build_add_hero(hero)?;
        self.fetch(request, HeroClient::parse_add_hero).await
    }

    async fn try_update_hero(&self, hero: &Hero) -> Result<serde_json::Value, ApiError> {
        let request = self.client.build_update_hero(hero)?;
        self.fetch(request, HeroClient::parse_update_hero).await
    }

    async fn fetch<R>(&self, request: HttpRequest, parse: Parse<R>) -> Result<R, ApiError> {
        let response = self.transport.send(request).await?;
        parse(&self.client, response)
    }

    /// Build the failure handler for `operation`: it records the error and
    /// yields `fallback` so the caller always gets a value.
    fn handle_error<'a, R: 'a>(
        &'a self,
        operation: String,
        fallback: R,
    ) -> impl FnOnce(ApiError) -> R + 'a {
        move |err| {
            error!(operation = %operation, error = ?err, "hero request failed");
            self.log(format!("{operation} failed: {err}"));
            fallback
        }
    }

    fn log(&self, message: impl AsRef<str>) {
        self.messages.add(format!("HeroService: {}", message.as_ref()));
    }
}
