mod profile;
mod user;

pub use profile::*;
pub use user::*;

/// Anything that can be shown with an avatar.
pub trait AvatarSource {
    fn avatar_url(&self) -> Option<&str>;
    fn email(&self) -> Option<&str>;
}

