//! Cart Id Persistence
//!
//! The cart id is the only piece of client state that survives restarts.
//! Everything else is refetched from the storefront.

use std::path::PathBuf;

/// Key under which the cart id is stored
pub const CART_ID_KEY: &str = "shopifyCartId";

/// Durable storage for the active cart id
pub trait CartIdStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, cart_id: &str);
    fn clear(&mut self);
}

impl<S: CartIdStore + ?Sized> CartIdStore for &mut S {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&mut self, cart_id: &str) {
        (**self).save(cart_id)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/// File-backed store. IO failures are logged and treated as an empty store,
/// the cart layer recovers by creating a fresh cart.
pub struct FileCartIdStore {
    path: PathBuf,
}

impl FileCartIdStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(CART_ID_KEY),
        }
    }
}

impl CartIdStore for FileCartIdStore {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let id = contents.trim().to_string();
                if id.is_empty() { None } else { Some(id) }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "failed to read cart id");
                None
            }
        }
    }

    fn save(&mut self, cart_id: &str) {
        if let Err(err) = std::fs::write(&self.path, cart_id) {
            tracing::warn!(path = %self.path.display(), %err, "failed to persist cart id");
        }
    }

    fn clear(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), %err, "failed to clear cart id");
            }
        }
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryCartIdStore {
    id: Option<String>,
}

impl CartIdStore for MemoryCartIdStore {
    fn load(&self) -> Option<String> {
        self.id.clone()
    }

    fn save(&mut self, cart_id: &str) {
        self.id = Some(cart_id.to_string());
    }

    fn clear(&mut self) {
        self.id = None;
    }
}
