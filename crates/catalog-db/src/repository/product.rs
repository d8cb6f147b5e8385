//! # Product Repository
//!
//! Postgres implementation of [`ProductStore`]: each operation is a single
//! stored-procedure call.
//!
//! ## Procedure Calls
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fetch_by_code(123)                                                    │
//! │      SELECT code, description FROM sp_se1_produto($1)     $1 = 123     │
//! │                                                                         │
//! │  fetch_by_description("note")                                          │
//! │      SELECT code, description FROM sp_se_produto($1)      $1 = 'note'  │
//! │                                                                         │
//! │  save(123, "Notebook")                                                 │
//! │      SELECT code, description FROM sp_gr_produto($1, $2)               │
//! │                                                                         │
//! │  delete(123)                                                           │
//! │      SELECT sp_ex_produto($1)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::ProductStore;
use crate::error::DbResult;
use crate::procedures::ProcedureSet;
use catalog_core::Product;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let product = repo.fetch_by_code(123).await?;
/// let all = repo.fetch_by_description("%").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
    procedures: ProcedureSet,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    ///
    /// `procedures` must already be validated (see [`ProcedureSet::validate`]);
    /// [`crate::Database::new`] does this.
    pub fn new(pool: PgPool, procedures: ProcedureSet) -> Self {
        ProductRepository { pool, procedures }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn fetch_by_code(&self, code: i32) -> DbResult<Option<Product>> {
        debug!(code, procedure = %self.procedures.fetch_by_code, "Fetching product by code");

        let sql = self.procedures.fetch_by_code_sql();
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn fetch_by_description(&self, pattern: &str) -> DbResult<Vec<Product>> {
        debug!(
            pattern = %pattern,
            procedure = %self.procedures.search_by_description,
            "Searching products by description"
        );

        let sql = self.procedures.search_by_description_sql();
        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    async fn save(&self, code: i32, description: &str) -> DbResult<Option<Product>> {
        debug!(code, procedure = %self.procedures.save, "Saving product");

        let sql = self.procedures.save_sql();
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(code)
            .bind(description)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn delete(&self, code: i32) -> DbResult<()> {
        debug!(code, procedure = %self.procedures.delete, "Deleting product");

        let sql = self.procedures.delete_sql();
        sqlx::query(&sql).bind(code).execute(&self.pool).await?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Postgres Tests
// =============================================================================
