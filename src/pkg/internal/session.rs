use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const INTERVIEW_ID_KEY: &str = "interviewId";

// missing session values mean dependent operations skip silently, they never error
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    pub fn from_env() -> Self {
        let store = SessionStore::new();
        for (env_key, session_key) in [
            ("TOKEN", TOKEN_KEY),
            ("USER_ID", USER_ID_KEY),
            ("INTERVIEW_ID", INTERVIEW_ID_KEY),
        ] {
            if let Ok(value) = std::env::var(env_key) {
                if !value.is_empty() {
                    store.set(session_key, &value);
                }
            }
        }
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("session store poisoned")
            .get(key)
            .cloned()
    }

    pub fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .expect("session store poisoned")
            .insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.values
            .lock()
            .expect("session store poisoned")
            .remove(key);
    }

    pub fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    pub fn user_id(&self) -> Option<String> {
        self.get(USER_ID_KEY)
    }

    pub fn interview_id(&self) -> Option<String> {
        self.get(INTERVIEW_ID_KEY)
    }
}
