use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::pokemon::models::{CreatePokemonRequest, Pokemon, PokemonPage};
use crate::modules::pokemon::repositories::PokemonRepository;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

/// Service for pokemon business logic. Holds the single shared store
/// instance injected at startup.
pub struct PokemonService {
    repo: Arc<dyn PokemonRepository>,
}

impl PokemonService {
    pub fn new(repo: Arc<dyn PokemonRepository>) -> Self {
        Self { repo }
    }

    /// Create a new catalog entry
    pub async fn create(&self, request: CreatePokemonRequest) -> Result<Pokemon> {
        if request.name.trim().is_empty() {
            return Err(AppError::validation("name must be a non-empty string"));
        }

        if request.type_name.trim().is_empty() {
            return Err(AppError::validation("type must be a non-empty string"));
        }

        let pokemon = request.into_pokemon();
        self.repo.insert(&pokemon).await?;

        Ok(pokemon)
    }

    /// Paginated listing ordered by name ascending.
    ///
    /// `page` is validated before `limit`, so a request with both out of
    /// range reports the page problem.
    pub async fn list(&self, page: Option<i64>, limit: Option<i64>) -> Result<PokemonPage> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page < 1 {
            return Err(AppError::validation("page must be a positive integer"));
        }

        if limit < 1 {
            return Err(AppError::validation("limit must be a positive integer"));
        }

        let skip = (page - 1) * limit;
        let (items, total) = self.repo.find_and_count(skip, limit).await?;

        Ok(PokemonPage::new(items, total, page, limit))
    }

    /// Total number of catalog entries
    pub async fn count(&self) -> Result<i64> {
        self.repo.count().await
    }

    /// Exact-match lookup by name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Pokemon>> {
        self.repo.find_by_name(name).await
    }

    /// Remove every catalog entry
    pub async fn delete_all(&self) -> Result<()> {
        self.repo.clear().await
    }
}
