use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use {tsify::Tsify, wasm_bindgen::prelude::*};

use crate::{BridgeError, PlatformContext, MAX_SEND_DATA_BYTES};

/// The message handed to the host after a successful login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HandoffPayload {
    /// Session token issued by the authentication service.
    pub token: String,
    /// Telegram user id, when the shape includes it and the host provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_user_id: Option<i64>,
    /// Raw signed `initData`, when the shape includes it and the host provided it.
    #[serde(
        default,
        rename = "initData",
        skip_serializing_if = "Option::is_none"
    )]
    pub init_data: Option<String>,
}

impl HandoffPayload {
    /// Encodes the payload as the single JSON string the bridge transports. Fails when the
    /// encoded message exceeds [`MAX_SEND_DATA_BYTES`].
    pub fn to_bridge_string(&self) -> Result<String, BridgeError> {
        let data = serde_json::to_string(self).expect("Serialize should be infallible");

        if data.len() > MAX_SEND_DATA_BYTES {
            return Err(BridgeError::PayloadTooLarge {
                size: data.len(),
                limit: MAX_SEND_DATA_BYTES,
            });
        }
        Ok(data)
    }
}

/// Which fields the [`HandoffPayload`] carries besides the token.
///
/// The receiving bot decides what it expects, so this is configuration rather than a fixed
/// choice.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "wasm", derive(Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub enum PayloadShape {
    /// `{ token }`
    TokenOnly,
    /// `{ token, telegram_user_id }`
    TokenWithUserId,
    /// `{ token, telegram_user_id, initData }`
    #[default]
    TokenWithIdentity,
}

impl PayloadShape {
    /// Builds the payload for `token`. Identity fields absent from the context are omitted.
    pub fn build(self, token: &str, context: &PlatformContext) -> HandoffPayload {
        let (telegram_user_id, init_data) = match self {
            PayloadShape::TokenOnly => (None, None),
            PayloadShape::TokenWithUserId => (context.user_id(), None),
            PayloadShape::TokenWithIdentity => {
                (context.user_id(), context.init_data().map(str::to_owned))
            }
        };

        HandoffPayload {
            token: token.to_owned(),
            telegram_user_id,
            init_data,
        }
    }
}
