use std::env::{self, VarError};

use anyhow::{bail, Context};
use avatar_shared::avatar::{DEFAULT_IMAGE_PATH, DEFAULT_SIZE};

use crate::args::Args;

#[derive(Debug, Clone)]
pub struct Config {
    pub root_url: String,
    pub size: u16,
    pub default_image_path: String,
}

impl Config {
    /// Flags win over the environment. An env var shadowed by a flag is never read.
    pub fn load(args: &Args) -> anyhow::Result<Self> {
        let root_url = match &args.root_url {
            Some(root_url) => root_url.clone(),
            None => {
                env_var("ROOT_URL")?.unwrap_or_else(|| "http://localhost:3000/".to_string())
            }
        };

        let size = match args.size {
            Some(size) => size,
            None => match env_var("AVATAR_SIZE")? {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("AVATAR_SIZE is not a valid size: {raw}"))?,
                None => DEFAULT_SIZE,
            },
        };

        let default_image_path =
            env_var("AVATAR_DEFAULT_IMAGE")?.unwrap_or_else(|| DEFAULT_IMAGE_PATH.to_string());

        Ok(Self {
            root_url,
            size,
            default_image_path,
        })
    }
}

/// Unset means `None`; a value that is not valid UTF-8 is an error.
fn env_var(key: &str) -> anyhow::Result<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => bail!("{key} is not valid UTF-8"),
    }
}
