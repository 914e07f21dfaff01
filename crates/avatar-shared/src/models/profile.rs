use serde::{Deserialize, Serialize};

use super::AvatarSource;

/// The two user fields avatar resolution reads. Deserializes from any
/// user-shaped JSON object, ignoring the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl AvatarProfile {
    pub fn new(email: Option<String>, avatar_url: Option<String>) -> Self {
        Self { email, avatar_url }
    }
}

impl AvatarSource for AvatarProfile {
    fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
