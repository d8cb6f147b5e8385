//! Product orchestration service.
//!
//! Every operation is a short sequence of [`ProductStore`] calls. Nothing is
//! cached between requests and there is no rollback: a failed step leaves
//! whatever earlier steps already wrote.
//!
//! ## Error Remapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  store call fails (DbError)                                             │
//! │       │                                                                 │
//! │       ├── warn!(operation, error = %cause)                              │
//! │       ▼                                                                 │
//! │  CatalogError::BadRequest { message: "error creating product",          │
//! │                             source: Some(cause) }                       │
//! │                                                                         │
//! │  NotFound / BadRequest raised by an inner step pass through as-is.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use catalog_core::validation::{validate_description, validate_input};
use catalog_core::{
    BoxError, CatalogError, CatalogResult, DeleteConfirmation, Product, ProductInput,
    DEFAULT_CODE_ATTEMPTS, MATCH_ALL_PATTERN,
};
use catalog_db::ProductStore;

use super::codes::CodeSource;

/// Orchestrates product operations over a [`ProductStore`].
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    codes: Arc<dyn CodeSource>,
    max_code_attempts: u32,
}

impl ProductService {
    /// Creates a service with the default code generation ceiling.
    pub fn new(store: Arc<dyn ProductStore>, codes: Arc<dyn CodeSource>) -> Self {
        ProductService {
            store,
            codes,
            max_code_attempts: DEFAULT_CODE_ATTEMPTS,
        }
    }

    /// Sets how many random draws `generate_unique_code` makes before giving up.
    pub fn with_max_code_attempts(mut self, attempts: u32) -> Self {
        self.max_code_attempts = attempts.max(1);
        self
    }

    /// Returns true when the underlying store answers.
    pub async fn is_healthy(&self) -> bool {
        self.store.health_check().await
    }

    /// Looks up a single product.
    pub async fn find_by_code(&self, code: i32) -> CatalogResult<Product> {
        debug!(code, "Fetching product by code");

        match self.store.fetch_by_code(code).await {
            Ok(Some(product)) => Ok(product),
            Ok(None) => Err(CatalogError::NotFound(code)),
            Err(e) => Err(remap("error fetching product by code", e)),
        }
    }

    /// Searches descriptions for `text`. An empty result is not an error.
    pub async fn find_by_description(&self, text: &str) -> CatalogResult<Vec<Product>> {
        debug!(pattern = %text, "Searching products by description");

        self.store
            .fetch_by_description(text)
            .await
            .map_err(|e| remap("error searching products by description", e))
    }

    /// Lists every product.
    pub async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        debug!("Listing products");

        self.store
            .fetch_by_description(MATCH_ALL_PATTERN)
            .await
            .map_err(|e| remap("error listing products", e))
    }

    /// Draws random codes until one is free.
    ///
    /// Gives up with `BadRequest` after `max_code_attempts` collisions. A
    /// lookup failure other than `NotFound` ends the search immediately.
    pub async fn generate_unique_code(&self) -> CatalogResult<i32> {
        for attempt in 1..=self.max_code_attempts {
            let code = self.codes.next_code();

            match self.find_by_code(code).await {
                Err(CatalogError::NotFound(_)) => {
                    debug!(code, attempt, "Generated unique code");
                    return Ok(code);
                }
                Ok(_) => debug!(code, attempt, "Generated code already in use"),
                Err(e) => return Err(e),
            }
        }

        warn!(
            attempts = self.max_code_attempts,
            "Gave up generating a unique product code"
        );
        Err(CatalogError::bad_request("could not generate unique code"))
    }

    /// Creates a product, generating its code when none is supplied.
    pub async fn create(&self, input: ProductInput) -> CatalogResult<Product> {
        validate_input(&input)?;

        let code = match input.code {
            Some(code) => match self.find_by_code(code).await {
                Ok(_) => {
                    return Err(CatalogError::bad_request(format!(
                        "product with code {} already exists",
                        code
                    )))
                }
                Err(CatalogError::NotFound(_)) => code,
                Err(e) => return Err(e),
            },
            None => self.generate_unique_code().await?,
        };

        let saved = self
            .store
            .save(code, &input.description)
            .await
            .map_err(|e| remap("error creating product", e))?;

        info!(code, "Product created");

        match saved {
            Some(product) => Ok(product),
            None => self.find_by_code(code).await,
        }
    }

    /// Replaces the description of an existing product.
    pub async fn update(&self, input: ProductInput) -> CatalogResult<Product> {
        let Some(code) = input.code else {
            return Err(CatalogError::bad_request("code is required for update"));
        };
        validate_description(&input.description)?;

        self.find_by_code(code).await?;

        // The echoed row is ignored; the re-fetch below is authoritative.
        self.store
            .save(code, &input.description)
            .await
            .map_err(|e| remap("error updating product", e))?;

        info!(code, "Product updated");

        self.find_by_code(code).await
    }

    /// Updates the product under a supplied code, or creates one under a
    /// generated code when none is supplied.
    ///
    /// A supplied code that does not exist is rejected rather than created.
    pub async fn create_or_update(&self, input: ProductInput) -> CatalogResult<Product> {
        validate_input(&input)?;

        let code = match input.code {
            Some(code) => match self.find_by_code(code).await {
                Ok(_) => code,
                Err(CatalogError::NotFound(_)) => {
                    return Err(CatalogError::bad_request(format!(
                        "product with code {} does not exist and cannot be updated",
                        code
                    )))
                }
                Err(e) => return Err(e),
            },
            None => self.generate_unique_code().await?,
        };

        let saved = self
            .store
            .save(code, &input.description)
            .await
            .map_err(|e| remap("error creating/updating product", e))?;

        debug!(code, supplied = input.code.is_some(), "Product saved");

        if let Some(product) = saved {
            return Ok(product);
        }

        if input.code.is_some() {
            return self.find_by_code(code).await;
        }

        // No code to re-fetch by: the first description match stands in.
        self.find_by_description(&input.description)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::bad_request("error creating/updating product"))
    }

    /// Deletes an existing product.
    pub async fn remove(&self, code: i32) -> CatalogResult<DeleteConfirmation> {
        match self.find_by_code(code).await {
            Ok(_) => {}
            Err(e @ CatalogError::NotFound(_)) => return Err(e),
            Err(e) => return Err(remap("error deleting product", e)),
        }

        self.store
            .delete(code)
            .await
            .map_err(|e| remap("error deleting product", e))?;

        info!(code, "Product deleted");

        Ok(DeleteConfirmation::for_code(code))
    }
}

/// Folds `cause` into a `BadRequest` carrying `message`, logging the cause.
fn remap(message: &'static str, cause: impl Into<BoxError>) -> CatalogError {
    let cause = cause.into();
    warn!(operation = message, error = %cause, "Product operation failed");
    CatalogError::bad_request_caused_by(message, cause)
}
