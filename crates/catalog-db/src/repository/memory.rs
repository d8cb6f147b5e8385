//! # In-Memory Product Store
//!
//! A [`ProductStore`] backed by a `BTreeMap`, with the same observable
//! behaviour as the bundled procedures:
//!
//! - description search is a case-insensitive substring `LIKE` (`%`, `_`)
//! - results come back ordered by code
//! - save is an upsert
//!
//! Two switches make gateway behaviour reproducible in tests:
//! [`set_offline`](MemoryProductStore::set_offline) fails every call with
//! [`DbError::Offline`], and
//! [`set_echo_saves`](MemoryProductStore::set_echo_saves) controls whether
//! `save` returns the written row.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::ProductStore;
use crate::error::{DbError, DbResult};
use catalog_core::Product;

/// In-process product store.
#[derive(Debug)]
pub struct MemoryProductStore {
    products: RwLock<BTreeMap<i32, String>>,
    offline: AtomicBool,
    echo_saves: AtomicBool,
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        MemoryProductStore {
            products: RwLock::new(BTreeMap::new()),
            offline: AtomicBool::new(false),
            echo_saves: AtomicBool::new(true),
        }
    }
}

impl MemoryProductStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `products`.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products
            .into_iter()
            .map(|p| (p.code, p.description))
            .collect();
        MemoryProductStore {
            products: RwLock::new(map),
            ..Self::default()
        }
    }

    /// When true, every call fails with [`DbError::Offline`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// When false, `save` writes but returns no row.
    pub fn set_echo_saves(&self, echo: bool) {
        self.echo_saves.store(echo, Ordering::SeqCst);
    }

    /// Number of stored products.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Snapshot of every stored product, ordered by code.
    pub async fn snapshot(&self) -> Vec<Product> {
        self.products
            .read()
            .await
            .iter()
            .map(|(code, description)| Product::new(*code, description.clone()))
            .collect()
    }

    fn ensure_online(&self) -> DbResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DbError::Offline);
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn fetch_by_code(&self, code: i32) -> DbResult<Option<Product>> {
        self.ensure_online()?;
        let products = self.products.read().await;
        Ok(products
            .get(&code)
            .map(|description| Product::new(code, description.clone())))
    }

    async fn fetch_by_description(&self, pattern: &str) -> DbResult<Vec<Product>> {
        self.ensure_online()?;
        let wrapped = format!("%{pattern}%");
        let products = self.products.read().await;
        let found: Vec<Product> = products
            .iter()
            .filter(|(_, description)| like_matches(&wrapped, description))
            .map(|(code, description)| Product::new(*code, description.clone()))
            .collect();

        debug!(pattern = %pattern, count = found.len(), "Memory search");
        Ok(found)
    }

    async fn save(&self, code: i32, description: &str) -> DbResult<Option<Product>> {
        self.ensure_online()?;
        self.products
            .write()
            .await
            .insert(code, description.to_string());

        if self.echo_saves.load(Ordering::SeqCst) {
            Ok(Some(Product::new(code, description)))
        } else {
            Ok(None)
        }
    }

    async fn delete(&self, code: i32) -> DbResult<()> {
        self.ensure_online()?;
        self.products.write().await.remove(&code);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.offline.load(Ordering::SeqCst)
    }
}

/// Case-insensitive SQL `LIKE`: `%` matches any run of characters, `_`
/// exactly one. No escape character.
fn like_matches(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let text: Vec<char> = text.to_lowercase().chars().collect();

    // matched[j]: pattern[..i] matches text[..j]
    let mut matched = vec![false; text.len() + 1];
    matched[0] = true;

    for p in &pattern {
        let mut next = vec![false; text.len() + 1];
        match p {
            '%' => {
                let mut any = false;
                for j in 0..=text.len() {
                    any = any || matched[j];
                    next[j] = any;
                }
            }
            '_' => {
                for j in 1..=text.len() {
                    next[j] = matched[j - 1];
                }
            }
            literal => {
                for j in 1..=text.len() {
                    next[j] = matched[j - 1] && text[j - 1] == *literal;
                }
            }
        }
        matched = next;
    }

    matched[text.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryProductStore {
        MemoryProductStore::with_products([
            Product::new(1001, "Notebook Dell Inspiron"),
            Product::new(1002, "Mouse Logitech"),
            Product::new(1003, "Notebook Lenovo"),
        ])
    }

    #[test]
    fn test_like_wildcards() {
        assert!(like_matches("%", ""));
        assert!(like_matches("%%%", "anything"));
        assert!(like_matches("%book%", "Notebook Dell"));
        assert!(like_matches("n_te%", "Notebook"));
        assert!(!like_matches("n_te", "Notebook"));
        assert!(!like_matches("%tablet%", "Notebook Dell"));
    }

    #[test]
    fn test_like_is_case_insensitive() {
        assert!(like_matches("%DELL%", "notebook dell"));
    }

    #[tokio::test]
    async fn test_lone_wildcard_returns_everything_in_code_order() {
        let store = sample();
        let codes: Vec<i32> = store
            .fetch_by_description("%")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(codes, vec![1001, 1002, 1003]);
    }

    #[tokio::test]
    async fn test_substring_search() {
        let store = sample();
        let found = store.fetch_by_description("notebook").await.unwrap();
        assert_eq!(found.len(), 2);

        let none = store.fetch_by_description("teclado").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_save_is_upsert() {
        let store = sample();
        let saved = store.save(1002, "Mouse sem fio").await.unwrap();
        assert_eq!(saved, Some(Product::new(1002, "Mouse sem fio")));
        assert_eq!(store.len().await, 3);

        store.save(2000, "Monitor").await.unwrap();
        assert_eq!(store.len().await, 4);
    }

    #[tokio::test]
    async fn test_save_without_echo_still_writes() {
        let store = MemoryProductStore::new();
        store.set_echo_saves(false);

        assert_eq!(store.save(5, "Cabo HDMI").await.unwrap(), None);
        assert_eq!(
            store.fetch_by_code(5).await.unwrap(),
            Some(Product::new(5, "Cabo HDMI"))
        );
    }

    #[tokio::test]
    async fn test_offline_fails_every_call() {
        let store = sample();
        store.set_offline(true);

        assert!(matches!(
            store.fetch_by_code(1001).await,
            Err(DbError::Offline)
        ));
        assert!(store.fetch_by_description("%").await.is_err());
        assert!(store.save(1, "x").await.is_err());
        assert!(store.delete(1001).await.is_err());
        assert!(!store.health_check().await);

        store.set_offline(false);
        assert!(store.fetch_by_code(1001).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_code_is_not_an_error() {
        let store = sample();
        store.delete(42).await.unwrap();
        store.delete(1001).await.unwrap();
        assert_eq!(store.fetch_by_code(1001).await.unwrap(), None);
    }
}
