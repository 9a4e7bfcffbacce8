use std::collections::BTreeMap;

use crate::route::Route;
use crate::types::{Result, WizardError};

/// Storage key of the session flag
pub const SESSION_KEY: &str = "isAuthenticated";
/// The only value that counts as signed in
pub const SESSION_MARKER: &str = "true";

/// Key/value storage the session flag lives in (browser localStorage, eframe
/// storage, a file for the CLI).
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store, used by tests and as the GUI's working copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// JSON file backed store. Changes are written by [`FileStore::save`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
    entries: BTreeMap<String, String>,
}

#[cfg(feature = "serde")]
impl FileStore {
    /// Open the store at `path`; a missing file is an empty store.
    pub async fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                WizardError::Config(format!("Failed to parse session file: {}", e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    pub async fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries).map_err(|e| {
            WizardError::Config(format!("Failed to serialize session file: {}", e))
        })?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(feature = "serde")]
impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Outcome of checking the gate for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the requested route's content
    Render(Route),
    /// Render nothing and navigate elsewhere
    Redirect(Route),
}

/// Presence check on the session flag. There is no credential or expiry.
pub struct SessionGate;

impl SessionGate {
    pub fn is_authenticated(flag: Option<&str>) -> bool {
        flag == Some(SESSION_MARKER)
    }

    pub fn is_signed_in<S: SessionStore + ?Sized>(store: &S) -> bool {
        Self::is_authenticated(store.get(SESSION_KEY).as_deref())
    }

    /// Decide what happens when `route` is visited.
    pub fn check<S: SessionStore + ?Sized>(store: &S, route: Route) -> GateDecision {
        let target = route.resolve(Self::is_signed_in(store));
        if target == route {
            GateDecision::Render(route)
        } else {
            log::debug!("Redirecting {} -> {}", route, target);
            GateDecision::Redirect(target)
        }
    }

    /// Error unless signed in.
    pub fn require<S: SessionStore + ?Sized>(store: &S) -> Result<()> {
        if Self::is_signed_in(store) {
            Ok(())
        } else {
            Err(WizardError::Unauthenticated)
        }
    }

    /// Set the flag and return the landing route.
    pub fn login<S: SessionStore + ?Sized>(store: &mut S) -> Route {
        store.set(SESSION_KEY, SESSION_MARKER);
        log::info!("Signed in");
        Route::Dashboard.resolve(true)
    }

    /// Clear the flag and return the root route.
    pub fn logout<S: SessionStore + ?Sized>(store: &mut S) -> Route {
        store.remove(SESSION_KEY);
        log::info!("Signed out");
        Route::Root
    }
}
