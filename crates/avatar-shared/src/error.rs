#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AvatarError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
