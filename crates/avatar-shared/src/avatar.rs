use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::error::AvatarError;
use crate::models::AvatarSource;

pub const GRAVATAR_BASE_URL: &str = "http://gravatar.com/avatar/";
pub const DEFAULT_IMAGE_PATH: &str = "images/guest.png";
pub const DEFAULT_SIZE: u16 = 48;
/// Gravatar serves sizes from 1px up to 2048px.
pub const MAX_SIZE: u16 = 2048;

/// Non-null and non-blank after trimming.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Lowercase hex MD5 of the lowercased email.
pub fn gravatar_id(email: &str) -> String {
    hex::encode(Md5::digest(email.to_lowercase().as_bytes()))
}

/// Resolve with default options.
pub fn avatar_url<S: AvatarSource + ?Sized>(
    user: &S,
    root_url: &str,
) -> Result<String, AvatarError> {
    AvatarResolver::default().resolve(user, root_url)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarKind {
    Uploaded,
    Gravatar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub url: String,
    pub kind: AvatarKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarOptions {
    size: u16,
    default_image_path: String,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            default_image_path: DEFAULT_IMAGE_PATH.to_string(),
        }
    }
}

impl AvatarOptions {
    pub fn with_size(mut self, size: u16) -> Result<Self, AvatarError> {
        if size == 0 || size > MAX_SIZE {
            return Err(AvatarError::InvalidInput(format!(
                "avatar size must be between 1 and {MAX_SIZE}, got {size}"
            )));
        }
        self.size = size;
        Ok(self)
    }

    pub fn with_default_image(mut self, path: impl Into<String>) -> Self {
        self.default_image_path = path.into();
        self
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn default_image_path(&self) -> &str {
        &self.default_image_path
    }
}

/// Picks the user's own avatar, falling back to Gravatar with a site-hosted
/// guest image as Gravatar's default.
#[derive(Debug, Clone, Default)]
pub struct AvatarResolver {
    options: AvatarOptions,
}

impl AvatarResolver {
    pub fn new(options: AvatarOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AvatarOptions {
        &self.options
    }

    pub fn resolve<S: AvatarSource + ?Sized>(
        &self,
        user: &S,
        root_url: &str,
    ) -> Result<String, AvatarError> {
        self.resolve_avatar(user, root_url).map(|avatar| avatar.url)
    }

    pub fn resolve_avatar<S: AvatarSource + ?Sized>(
        &self,
        user: &S,
        root_url: &str,
    ) -> Result<Avatar, AvatarError> {
        if let Some(url) = user.avatar_url().filter(|url| is_present(Some(*url))) {
            return Ok(Avatar {
                url: url.to_string(),
                kind: AvatarKind::Uploaded,
            });
        }

        let email = user
            .email()
            .filter(|email| is_present(Some(*email)))
            .ok_or_else(|| {
                AvatarError::InvalidInput("email is required for a Gravatar fallback".to_string())
            })?;

        let default_url = format!("{}{}", root_url, self.options.default_image_path);
        let gravatar_id = gravatar_id(email);
        tracing::debug!(%gravatar_id, %default_url, "No uploaded avatar, using Gravatar");

        Ok(Avatar {
            url: format!(
                "{}{}.png?s={}&d={}",
                GRAVATAR_BASE_URL,
                gravatar_id,
                self.options.size,
                urlencoding::encode(&default_url)
            ),
            kind: AvatarKind::Gravatar,
        })
    }
}
