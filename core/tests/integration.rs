//! Full service lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every `HeroService`
//! operation over real HTTP through `ReqwestTransport`. Validates request
//! building, response parsing and the message log end-to-end.

use std::sync::Arc;

use hero_core::{HeroClient, HeroService, MessageService, NewHero, ReqwestTransport};
use tokio::net::TcpListener;

async fn start_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}")
}

#[tokio::test]
async fn crud_lifecycle() {
    // Step 1: start mock server on a random port.
    let base_url = start_server().await;
    let messages = Arc::new(MessageService::new());
    let service = HeroService::new(
        HeroClient::new(&base_url),
        ReqwestTransport::new(),
        Arc::clone(&messages),
    );

    // Step 2: list returns the seeded roster.
    let heroes = service.get_heroes().await;
    assert_eq!(heroes.len(), 10);
    assert!(messages.is_empty(), "plain listing logs nothing");

    // Step 3: search.
    let found = service.search_heroes("mag").await;
    let names: Vec<&str> = found.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Magneta", "Magma"]);
    assert!(service.search_heroes("  ").await.is_empty());

    // Step 4: create.
    let created = service.add_hero(&NewHero::new("Zorro")).await.unwrap();
    assert_eq!(created.id, 21);
    assert_eq!(created.name, "Zorro");

    // Step 5: get the created hero.
    let fetched = service.get_hero(created.id).await;
    assert_eq!(fetched.as_ref(), Some(&created));

    // Step 6: update.
    let mut renamed = created.clone();
    renamed.name = "El Zorro".to_string();
    let ack = service.update_hero(&renamed).await;
    assert_eq!(ack, Some(serde_json::Value::Null));
    assert_eq!(service.get_hero(created.id).await, Some(renamed.clone()));

    // Step 7: delete.
    assert_eq!(service.delete_hero(created.id).await, Some(renamed));

    // Step 8: get after delete falls back to None.
    assert_eq!(service.get_hero(created.id).await, None);

    // Step 9: delete again falls back to None.
    assert_eq!(service.delete_hero(created.id).await, None);

    // Step 10: search with no match.
    assert!(service.search_heroes("xyz").await.is_empty());

    assert_eq!(
        messages.messages(),
        vec![
            r#"HeroService: found heroes matching "mag""#.to_string(),
            "HeroService: added hero w/ id=21".to_string(),
            "HeroService: fetched hero id=21".to_string(),
            "HeroService: updated hero id=21".to_string(),
            "HeroService: fetched hero id=21".to_string(),
            "HeroService: deleted hero id=21".to_string(),
            "HeroService: getHero id=21 failed: resource not found".to_string(),
            "HeroService: deleteHero failed: resource not found".to_string(),
            r#"HeroService: no heroes matching "xyz""#.to_string(),
        ]
    );
}

#[tokio::test]
async fn unreachable_server_falls_back_everywhere() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let messages = Arc::new(MessageService::new());
    let service = HeroService::new(
        HeroClient::new(&format!("http://{addr}")),
        ReqwestTransport::new(),
        Arc::clone(&messages),
    );

    assert!(service.get_heroes().await.is_empty());
    assert!(service.search_heroes("ma").await.is_empty());
    assert_eq!(service.get_hero(1).await, None);
    assert_eq!(service.add_hero(&NewHero::new("Nobody")).await, None);

    let log = messages.messages();
    assert_eq!(log.len(), 4);
    assert!(log[0].starts_with("HeroService: getHeroes failed: transport failed"));
    assert!(log[1].starts_with("HeroService: searchHeroes failed:"));
    assert!(log[2].starts_with("HeroService: getHero id=1 failed:"));
    assert!(log[3].starts_with("HeroService: addHero failed:"));
}
