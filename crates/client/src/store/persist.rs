//! Durable store state, one JSON file per store name.
//!
//! Cart contents and the active sales area survive across sessions. A
//! missing file loads as the store's default; a corrupt file is an error the
//! caller decides how to handle (typically: log and start fresh).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure reading or writing persisted store state.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error for store '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("corrupt state for store '{name}': {source}")]
    Corrupt {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

fn store_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.json"))
}

/// Load a store's persisted state, or its default when never persisted.
///
/// # Errors
///
/// Returns `PersistError::Io` on read failure other than a missing file and
/// `PersistError::Corrupt` when the file is not valid JSON for the store.
pub fn load<T: DeserializeOwned + Default>(dir: &Path, name: &str) -> Result<T, PersistError> {
    let path = store_path(dir, name);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(PersistError::Io {
                name: name.to_string(),
                source: e,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|e| PersistError::Corrupt {
        name: name.to_string(),
        source: e,
    })
}

/// Persist a store's state under its name.
///
/// # Errors
///
/// Returns `PersistError::Io` when the directory cannot be created or the
/// file cannot be written.
pub fn save<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<(), PersistError> {
    let io_err = |source| PersistError::Io {
        name: name.to_string(),
        source,
    };

    fs::create_dir_all(dir).map_err(io_err)?;

    let raw = serde_json::to_string_pretty(value).map_err(|e| PersistError::Corrupt {
        name: name.to_string(),
        source: e,
    })?;
    fs::write(store_path(dir, name), raw).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use repairhub_core::SalesArea;

    use crate::store::{CartStore, CurrencyStore};

    use super::*;

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cart: CartStore = load(dir.path(), CartStore::STORE_NAME).expect("load");
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_round_trip_keyed_by_store_name() {
        let dir = tempfile::tempdir().expect("tempdir");

        let mut currency = CurrencyStore::new();
        let mut cart = CartStore::new();
        currency.set_sales_area(SalesArea::Uk, &mut cart);

        save(dir.path(), CurrencyStore::STORE_NAME, &currency).expect("save");
        save(dir.path(), CartStore::STORE_NAME, &cart).expect("save");

        let loaded: CurrencyStore = load(dir.path(), CurrencyStore::STORE_NAME).expect("load");
        assert_eq!(loaded.sales_area(), SalesArea::Uk);

        assert!(dir.path().join("currency.json").exists());
        assert!(dir.path().join("cart.json").exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("cart.json"), "not json").expect("write");

        let result: Result<CartStore, _> = load(dir.path(), CartStore::STORE_NAME);
        assert!(matches!(result, Err(PersistError::Corrupt { .. })));
    }
}
