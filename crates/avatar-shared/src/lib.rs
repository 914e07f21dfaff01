pub mod api;
pub mod avatar;
pub mod error;
pub mod models;

pub use avatar::{
    avatar_url, gravatar_id, is_present, Avatar, AvatarKind, AvatarOptions, AvatarResolver,
};
pub use error::AvatarError;
