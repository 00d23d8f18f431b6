//! Social profile session value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::album_ids;

/// Profile id reported while no profile is loaded.
pub const DEFAULT_PROFILE_ID: &str = "1";

/// Attributes and album selection imported from a social network account.
///
/// Lives in the user's session and is dropped with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialProfile {
    /// Raw profile attributes as returned by the network.
    user_info: Option<Map<String, Value>>,
    /// Albums selected for import, in display order.
    album_ids: Vec<String>,
}

impl SocialProfile {
    /// Creates an empty, unloaded profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether profile attributes have been loaded.
    pub fn is_loaded(&self) -> bool {
        self.user_info.is_some()
    }

    /// The raw attributes, if loaded.
    pub fn user_info(&self) -> Option<&Map<String, Value>> {
        self.user_info.as_ref()
    }

    /// Replaces the profile attributes.
    pub fn set_user_info(&mut self, info: Map<String, Value>) {
        self.user_info = Some(info);
    }

    /// The profile's `id` attribute, or `"1"` when unavailable.
    pub fn user_id(&self) -> String {
        match self.user_info.as_ref().and_then(|info| info.get("id")) {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => DEFAULT_PROFILE_ID.to_string(),
        }
    }

    /// The selected album identifiers.
    pub fn album_ids(&self) -> &[String] {
        &self.album_ids
    }

    /// The selected album identifiers packed into one string.
    pub fn album_id_string(&self) -> String {
        album_ids::join(&self.album_ids)
    }

    /// Replaces the selection from a packed string.
    pub fn set_album_ids(&mut self, packed: &str) {
        self.album_ids = album_ids::parse(packed);
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        self.user_info = None;
        self.album_ids.clear();
    }
}
