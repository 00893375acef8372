//! Stateless HTTP request builder and response parser for the heroes API.
//!
//! # Design
//! `HeroClient` holds only the resolved heroes URL and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `HeroService` wires the two halves to a transport.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Hero, NewHero};

/// Path of the heroes collection relative to the base URL.
pub const HEROES_PATH: &str = "api/heroes";

/// Synchronous, stateless client for the heroes API.
#[derive(Debug, Clone)]
pub struct HeroClient {
    heroes_url: String,
}

impl HeroClient {
    /// Build a client rooted at `base_url`. An empty base yields the
    /// relative path `api/heroes`.
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let heroes_url = if base.is_empty() {
            HEROES_PATH.to_string()
        } else {
            format!("{base}/{HEROES_PATH}")
        };
        Self { heroes_url }
    }

    pub fn heroes_url(&self) -> &str {
        &self.heroes_url
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.heroes_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The term goes into the query string verbatim. Blank terms never reach
    /// this point; `HeroService::search_heroes` short-circuits them.
    pub fn build_search_heroes(&self, term: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/?name={term}", self.heroes_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_hero(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{id}", self.heroes_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add_hero(&self, hero: &NewHero) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(hero).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.heroes_url.clone(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(hero).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.heroes_url.clone(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_hero(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.heroes_url),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn parse_list_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response, &[200])?;
        decode(&response.body)
    }

    pub fn parse_search_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response, &[200])?;
        decode(&response.body)
    }

    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response, &[200])?;
        decode(&response.body)
    }

    pub fn parse_add_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response, &[200, 201])?;
        decode(&response.body)
    }

    /// The acknowledgment is opaque; an empty body (204) becomes `Value::Null`.
    pub fn parse_update_hero(&self, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        check_status(&response, &[200, 204])?;
        if response.body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        decode(&response.body)
    }

    pub fn parse_delete_hero(&self, response: HttpResponse) -> Result<Option<Hero>, ApiError> {
        check_status(&response, &[200, 204])?;
        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(None);
        }
        decode(&response.body).map(Some)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
