// Integration tests for the full pokemon HTTP surface
//
// Drives the real controllers and service through an actix test service,
// with an in-memory repository double standing in for MySQL. The double
// mirrors the storage semantics the service relies on: name-ascending
// ordering and skip/take pagination.

use std::sync::{Arc, Mutex};

use actix_web::{test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};

use pokedex::core::Result;
use pokedex::pokemon::controllers;
use pokedex::pokemon::{Pokemon, PokemonRepository, PokemonService};

#[derive(Default)]
struct InMemoryPokemonRepository {
    rows: Mutex<Vec<Pokemon>>,
}

#[async_trait]
impl PokemonRepository for InMemoryPokemonRepository {
    async fn insert(&self, pokemon: &Pokemon) -> Result<()> {
        self.rows.lock().unwrap().push(pokemon.clone());
        Ok(())
    }

    async fn find_and_count(&self, skip: i64, take: i64) -> Result<(Vec<Pokemon>, i64)> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        let total = rows.len() as i64;
        let items = rows
            .into_iter()
            .skip(skip as usize)
            .take(take as usize)
            .collect();

        Ok((items, total))
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn clear(&self) -> Result<()> {
        self.rows.lock().unwrap().clear();
        Ok(())
    }
}

fn test_service() -> web::Data<Arc<PokemonService>> {
    let repo = Arc::new(InMemoryPokemonRepository::default());
    web::Data::new(Arc::new(PokemonService::new(repo)))
}

fn create_payload(name: &str, type_name: &str) -> Value {
    json!({ "name": name, "type": type_name })
}

#[actix_web::test]
async fn test_create_then_get_by_name() {
    let app = test::init_service(
        App::new()
            .app_data(test_service())
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/pokemon")
        .set_json(create_payload("Pikachu", "Electric"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Pikachu");
    assert_eq!(body["data"]["type"], "Electric");

    let req = test::TestRequest::get().uri("/pokemon/Pikachu").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Pikachu");
    assert_eq!(body["data"]["type"], "Electric");
}

#[actix_web::test]
async fn test_get_missing_returns_404_with_null_data() {
    let app = test::init_service(
        App::new()
            .app_data(test_service())
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/pokemon/Missingno")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"].is_null());
}

#[actix_web::test]
async fn test_list_second_page_of_fifteen() {
    let app = test::init_service(
        App::new()
            .app_data(test_service())
            .configure(controllers::configure),
    )
    .await;

    for i in 1..=15 {
        let req = test::TestRequest::post()
            .uri("/pokemon")
            .set_json(create_payload(&format!("P{:02}", i), "Normal"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
    }

    let req = test::TestRequest::get()
        .uri("/pokemon?page=2&limit=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 5);
    assert_eq!(data["total"], 15);
    assert_eq!(data["page"], 2);
    assert_eq!(data["limit"], 10);
    assert_eq!(data["totalPages"], 2);

    // Page two starts where page one stopped
    assert_eq!(data["items"][0]["name"], "P11");
    assert_eq!(data["items"][4]["name"], "P15");
}

#[actix_web::test]
async fn test_list_defaults_to_first_page_of_ten() {
    let app = test::init_service(
        App::new()
            .app_data(test_service())
            .configure(controllers::configure),
    )
    .await;

    for i in 1..=15 {
        let req = test::TestRequest::post()
            .uri("/pokemon")
            .set_json(create_payload(&format!("P{:02}", i), "Normal"))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/pokemon").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 10);
    assert_eq!(data["page"], 1);
    assert_eq!(data["limit"], 10);
    assert_eq!(data["items"][0]["name"], "P01");
}

#[actix_web::test]
async fn test_list_empty_store_has_zero_pages() {
    let app = test::init_service(
        App::new()
            .app_data(test_service())
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/pokemon").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 0);
    assert_eq!(data["total"], 0);
    assert_eq!(data["totalPages"], 0);
}

#[actix_web::test]
async fn test_list_rejects_page_zero() {
    let app = test::init_service(
        App::new()
            .app_data(test_service())
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/pokemon?page=0").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"].as_str().unwrap().contains("page"));
}

#[actix_web::test]
async fn test_list_rejects_limit_zero() {
    let app = test::init_service(
        App::new()
            .app_data(test_service())
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/pokemon?limit=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"].as_str().unwrap().contains("limit"));
}

#[actix_web::test]
async fn test_list_reports_page_error_before_limit_error() {
    let app = test::init_service(
        App::new()
            .app_data(test_service())
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/pokemon?page=0&limit=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"].as_str().unwrap().contains("page"));
}

#[actix_web::test]
async fn test_list_rejects_non_numeric_parameters() {
    let app = test::init_service(
        App::new()
            .app_data(test_service())
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/pokemon?page=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get()
        .uri("/pokemon?limit=ten")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_delete_all_then_count_is_zero() {
    let app = test::init_service(
        App::new()
            .app_data(test_service())
            .configure(controllers::configure),
    )
    .await;

    for name in ["Bulbasaur", "Charmander", "Squirtle"] {
        let req = test::TestRequest::post()
            .uri("/pokemon")
            .set_json(create_payload(name, "Starter"))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::delete().uri("/pokemon").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"].is_string());

    let req = test::TestRequest::get().uri("/pokemon/count").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 0);
}

#[actix_web::test]
async fn test_count_route_is_not_shadowed_by_name_lookup() {
    let app = test::init_service(
        App::new()
            .app_data(test_service())
            .configure(controllers::configure),
    )
    .await;

    // An empty store must still answer the count route, not a 404 from
    // a lookup of a pokemon named "count"
    let req = test::TestRequest::get().uri("/pokemon/count").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 0);
}

#[actix_web::test]
async fn test_create_rejects_malformed_bodies() {
    let app = test::init_service(
        App::new()
            .app_data(test_service())
            .configure(controllers::configure),
    )
    .await;

    // Missing `type`
    let req = test::TestRequest::post()
        .uri("/pokemon")
        .set_json(json!({ "name": "Pikachu" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Empty `name`
    let req = test::TestRequest::post()
        .uri("/pokemon")
        .set_json(create_payload("", "Electric"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Nothing was persisted
    let req = test::TestRequest::get().uri("/pokemon/count").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 0);
}
