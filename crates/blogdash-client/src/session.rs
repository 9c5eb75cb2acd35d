//! Session store with pluggable persistence
//!
//! The store is created once at startup from whatever the backing storage
//! holds and is handed to whoever needs it; every mutation writes through to
//! storage before the in-memory state changes.

use blogdash_core::{Error, Result, Session, UserType};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::{info, warn};

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the user type
pub const USER_TYPE_KEY: &str = "userType";

/// String key/value persistence, shaped like browser local storage
pub trait SessionStorage {
    /// Read a key
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a key
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-process storage, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with entries
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// JSON file storage for running outside a browser
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    /// Storage backed by the file at `path`; the file is created on first write
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the configured session path
    pub fn from_config(config: &blogdash_core::Config) -> Self {
        Self::new(&config.session.path)
    }

    fn read_all(&self) -> Result<HashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(HashMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn write_all(&self, entries: &HashMap<String, String>) -> Result<()> {
        let text = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// Authentication state, initialised from and saved to a [`SessionStorage`]
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Read the persisted session
    ///
    /// Unreadable storage or an unknown user type is logged and treated as
    /// the corresponding value being absent.
    pub fn load(storage: S) -> Self {
        let token = storage.get(TOKEN_KEY).unwrap_or_else(|e| {
            warn!(error = %e, "failed to read persisted token");
            None
        });
        let user_type = storage
            .get(USER_TYPE_KEY)
            .unwrap_or_else(|e| {
                warn!(error = %e, "failed to read persisted user type");
                None
            })
            .and_then(|raw| match raw.parse::<UserType>() {
                Ok(user_type) => Some(user_type),
                Err(e) => {
                    warn!(error = %e, "ignoring persisted user type");
                    None
                }
            });

        Self {
            storage,
            session: Session { token, user_type },
        }
    }

    /// Store a token issued by the login endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted; the in-memory
    /// state is left unchanged in that case.
    pub fn login(&mut self, token: &str, user_type: UserType) -> Result<()> {
        self.save(&Session::user(token, user_type))?;
        info!(user_type = %user_type, "signed in");
        Ok(())
    }

    /// Start a local guest session without contacting the API
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted.
    pub fn guest_login(&mut self) -> Result<()> {
        self.save(&Session::guest())?;
        info!("continuing as guest");
        Ok(())
    }

    /// Sign out and clear the persisted session
    ///
    /// The in-memory session is cleared even when storage fails, and both
    /// keys are attempted.
    ///
    /// # Errors
    ///
    /// Returns the first storage error.
    pub fn logout(&mut self) -> Result<()> {
        self.session = Session::default();
        let token = self.storage.remove(TOKEN_KEY);
        let user_type = self.storage.remove(USER_TYPE_KEY);
        info!("signed out");
        token.and(user_type)
    }

    fn save(&mut self, session: &Session) -> Result<()> {
        let token = session
            .token
            .as_deref()
            .ok_or_else(|| Error::Storage("refusing to persist a session without a token".to_string()))?;
        let user_type = session.user_type.unwrap_or(UserType::User);

        self.storage.set(TOKEN_KEY, token)?;
        if let Err(e) = self.storage.set(USER_TYPE_KEY, user_type.as_str()) {
            self.restore_token();
            return Err(e);
        }
        self.session = session.clone();
        Ok(())
    }

    /// Put the persisted token back to the in-memory one after a partial save
    fn restore_token(&self) {
        let restored = match self.session.token.as_deref() {
            Some(previous) => self.storage.set(TOKEN_KEY, previous),
            None => self.storage.remove(TOKEN_KEY),
        };
        if let Err(e) = restored {
            warn!(error = %e, "failed to roll back persisted token");
        }
    }

    /// Current session
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Whether a token is present
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Whether the session belongs to a guest
    pub fn is_guest(&self) -> bool {
        self.session.is_guest()
    }

    /// Role of the session holder
    pub const fn user_type(&self) -> Option<UserType> {
        self.session.user_type
    }

    /// Token to send with API requests
    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    /// Role shown in the shell; sessions without a stored type count as users
    pub fn role_label(&self) -> &'static str {
        self.session
            .user_type
            .unwrap_or(UserType::User)
            .role_label()
    }

    /// Backing storage
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}
