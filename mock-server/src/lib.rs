use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

/// Id handed out when the collection is empty.
const FIRST_ID: u32 = 11;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<u32, Hero>>>;

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

impl Config {
    /// Reads `PORT`, falling back to 3000 when unset.
    pub fn from_env() -> Result<Self, std::num::ParseIntError> {
        match std::env::var("PORT") {
            Ok(port) => Self::from_port(&port),
            Err(_) => Ok(Self::default()),
        }
    }

    fn from_port(port: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self {
            port: port.trim().parse()?,
        })
    }

    pub fn addr(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}

/// The classic ten-hero roster the server starts with.
pub fn seed_heroes() -> Vec<Hero> {
    [
        (11, "Dr Nice"),
        (12, "Narco"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

pub fn app() -> Router {
    app_with(seed_heroes())
}

pub fn app_with(heroes: Vec<Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        heroes.into_iter().map(|hero| (hero.id, hero)).collect(),
    ));
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(create_hero).put(update_hero),
        )
        .route("/api/heroes/", get(list_heroes))
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "heroes api listening");
    }
    axum::serve(listener, app()).await
}

/// Lists heroes, optionally keeping only names that contain `?name=`
/// (case-insensitive).
async fn list_heroes(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    let needle = params.name.unwrap_or_default().to_lowercase();
    debug!(filter = %needle, "listing heroes");
    Json(
        heroes
            .values()
            .filter(|hero| hero.name.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}

async fn create_hero(
    State(db): State<Db>,
    Json(input): Json<NewHero>,
) -> (StatusCode, Json<Hero>) {
    let mut heroes = db.write().await;
    let id = heroes.keys().next_back().map_or(FIRST_ID, |max| max + 1);
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(id, hero.clone());
    debug!(id, "hero created");
    (StatusCode::CREATED, Json(hero))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_hero(
    State(db): State<Db>,
    Json(input): Json<Hero>,
) -> Result<StatusCode, StatusCode> {
    let mut heroes = db.write().await;
    let hero = heroes.get_mut(&input.id).ok_or(StatusCode::NOT_FOUND)?;
    hero.name = input.name;
    debug!(id = input.id, "hero updated");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_hero(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = db.write().await;
    let removed = heroes.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    debug!(id, "hero deleted");
    Ok(Json(removed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_serializes_to_json() {
        let hero = Hero {
            id: 11,
            name: "Dr Nice".to_string(),
        };
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json["id"], 11);
        assert_eq!(json["name"], "Dr Nice");
    }

    #[test]
    fn new_hero_rejects_missing_name() {
        let result: Result<NewHero, _> = serde_json::from_str(r#"{"id":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn seed_ids_are_unique_and_ascending() {
        let ids: Vec<u32> = seed_heroes().iter().map(|h| h.id).collect();
        assert_eq!(ids, (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn config_parses_port() {
        assert_eq!(Config::from_port("8080").unwrap(), Config { port: 8080 });
        assert_eq!(Config::from_port("8080").unwrap().addr(), "127.0.0.1:8080");
        assert!(Config::from_port("not-a-port").is_err());
    }
}
