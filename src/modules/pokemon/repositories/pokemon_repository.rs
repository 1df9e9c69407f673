use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::pokemon::models::Pokemon;

/// Storage abstraction the service layer talks to. Kept narrow so tests
/// can substitute an in-memory double.
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Persist one entry.
    async fn insert(&self, pokemon: &Pokemon) -> Result<()>;

    /// Fetch one page of entries ordered by name ascending, along with
    /// the total row count.
    async fn find_and_count(&self, skip: i64, take: i64) -> Result<(Vec<Pokemon>, i64)>;

    /// Total row count.
    async fn count(&self) -> Result<i64>;

    /// Exact-match lookup by name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>>;

    /// Remove every entry.
    async fn clear(&self) -> Result<()>;
}

/// MySQL-backed repository for the `pokemon` table
pub struct MySqlPokemonRepository {
    pool: MySqlPool,
}

impl MySqlPokemonRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PokemonRepository for MySqlPokemonRepository {
    async fn insert(&self, pokemon: &Pokemon) -> Result<()> {
        sqlx::query("INSERT INTO pokemon (name, `type`) VALUES (?, ?)")
            .bind(&pokemon.name)
            .bind(&pokemon.type_name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_and_count(&self, skip: i64, take: i64) -> Result<(Vec<Pokemon>, i64)> {
        let items = sqlx::query_as::<_, Pokemon>(
            "SELECT name, `type` FROM pokemon ORDER BY name ASC LIMIT ? OFFSET ?",
        )
        .bind(take)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pokemon")
            .fetch_one(&self.pool)
            .await?;

        Ok((items, total))
    }

    async fn count(&self) -> Result<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pokemon")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>> {
        let pokemon =
            sqlx::query_as::<_, Pokemon>("SELECT name, `type` FROM pokemon WHERE name = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(pokemon)
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM pokemon")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
