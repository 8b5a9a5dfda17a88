use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::api::RebrickableClient;
use crate::i18n::{DEFAULT_LANG, Lang};
use crate::prefs::LangStore;
use crate::session::Session;

/// Shared bot state: the upstream client, the explicit session table keyed
/// by Telegram user id, and the injected language preference store.
pub struct AppState {
    pub api: RebrickableClient,
    pub sessions: Mutex<HashMap<u64, Session>>,
    pub prefs: Box<dyn LangStore>,
}

impl AppState {
    pub fn new(api: RebrickableClient, prefs: Box<dyn LangStore>) -> Self {
        Self {
            api,
            sessions: Mutex::new(HashMap::new()),
            prefs,
        }
    }

    pub fn lang_for(&self, user_id: u64) -> Lang {
        self.prefs.get(user_id).unwrap_or(DEFAULT_LANG)
    }
}
