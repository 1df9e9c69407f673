use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::core::AppError;
use crate::modules::pokemon::models::CreatePokemonRequest;
use crate::modules::pokemon::services::PokemonService;

/// Query parameters for listing pokemon. Non-numeric values fail typed
/// deserialization and are rejected with a 400 before the handler runs;
/// defaulting and range checks live in the service.
#[derive(Debug, Deserialize)]
pub struct ListPokemonQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Create a new pokemon
///
/// POST /pokemon
pub async fn create_pokemon(
    service: web::Data<Arc<PokemonService>>,
    request: web::Json<CreatePokemonRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "data": created,
    })))
}

/// List pokemon with pagination
///
/// GET /pokemon?page=1&limit=10
pub async fn list_pokemon(
    service: web::Data<Arc<PokemonService>>,
    query: web::Query<ListPokemonQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service.list(query.page, query.limit).await?;

    Ok(HttpResponse::Ok().json(json!({
        "data": page,
    })))
}

/// Count pokemon
///
/// GET /pokemon/count
pub async fn count_pokemon(
    service: web::Data<Arc<PokemonService>>,
) -> Result<HttpResponse, AppError> {
    let total = service.count().await?;

    Ok(HttpResponse::Ok().json(json!({
        "total": total,
    })))
}

/// Get one pokemon by name
///
/// GET /pokemon/{name}
pub async fn get_pokemon(
    service: web::Data<Arc<PokemonService>>,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    match service.get_by_name(&name).await? {
        Some(pokemon) => Ok(HttpResponse::Ok().json(json!({
            "data": pokemon,
        }))),
        None => Ok(HttpResponse::NotFound().json(json!({
            "data": null,
        }))),
    }
}

/// Delete every pokemon
///
/// DELETE /pokemon
pub async fn delete_all_pokemon(
    service: web::Data<Arc<PokemonService>>,
) -> Result<HttpResponse, AppError> {
    service.delete_all().await?;

    Ok(HttpResponse::Ok().json(json!({
        "data": "All pokemon deleted",
    })))
}

/// Configure pokemon routes. `/count` is registered before `/{name}` so
/// it is not captured as a name lookup.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pokemon")
            .route("", web::post().to(create_pokemon))
            .route("", web::get().to(list_pokemon))
            .route("", web::delete().to(delete_all_pokemon))
            .route("/count", web::get().to(count_pokemon))
            .route("/{name}", web::get().to(get_pokemon)),
    );
}
