use std::collections::HashMap;

use serde::Deserialize;

/// Identity extracted from the host's `initData`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Identity {
    pub user_id: i64,
    pub init_data: String,
}

/// The part of the `user` field we read. Telegram sends more (names, language, ...).
#[derive(Deserialize)]
struct InitDataUser {
    id: i64,
}

impl Identity {
    /// Parses `initData`, a form encoded string whose `user` field holds a JSON object.
    ///
    /// Returns `None` unless the string is well formed and carries an integer user id. A
    /// partially readable payload is discarded as a whole.
    pub(crate) fn parse(init_data: &str) -> Option<Self> {
        if init_data.is_empty() {
            return None;
        }

        let fields: HashMap<String, String> = serde_urlencoded::from_str(init_data).ok()?;
        let user: InitDataUser = serde_json::from_str(fields.get("user")?).ok()?;

        Some(Identity {
            user_id: user.id,
            init_data: init_data.to_owned(),
        })
    }
}
