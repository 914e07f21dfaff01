use std::path::PathBuf;

use clap::Parser;

/// Print the avatar URL to show for a user
#[derive(Parser, Debug)]
#[command(name = "avatar")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// User email, hashed for the Gravatar fallback
    #[arg(long)]
    pub email: Option<String>,

    /// The user's own avatar URL
    #[arg(long)]
    pub avatar_url: Option<String>,

    /// Read a JSON user object from a file ("-" for stdin)
    #[arg(long, value_name = "PATH", conflicts_with_all = ["email", "avatar_url"])]
    pub user: Option<PathBuf>,

    /// Site root URL hosting images/guest.png (overrides ROOT_URL)
    #[arg(long)]
    pub root_url: Option<String>,

    /// Gravatar image size in pixels (overrides AVATAR_SIZE)
    #[arg(long)]
    pub size: Option<u16>,

    /// Print JSON instead of the bare URL
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
