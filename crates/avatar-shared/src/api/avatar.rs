use serde::{Deserialize, Serialize};

use crate::avatar::{Avatar, AvatarKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarResponse {
    pub avatar_url: String,
    pub kind: AvatarKind,
}

impl From<Avatar> for AvatarResponse {
    fn from(avatar: Avatar) -> Self {
        Self {
            avatar_url: avatar.url,
            kind: avatar.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        let response = AvatarResponse {
            avatar_url: "https://cdn.example.com/u/42.png".to_string(),
            kind: AvatarKind::Uploaded,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["kind"], "uploaded");
        assert_eq!(value["avatar_url"], "https://cdn.example.com/u/42.png");
    }
}
