use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use avatar_shared::api::AvatarResponse;
use avatar_shared::models::AvatarProfile;
use avatar_shared::{AvatarOptions, AvatarResolver};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod config;

use args::Args;
use config::Config;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.verbose);

    let config = Config::load(&args)?;
    tracing::debug!(?config, "Configuration loaded");

    let profile = match &args.user {
        Some(path) => read_profile(path)?,
        None => AvatarProfile::new(args.email.clone(), args.avatar_url.clone()),
    };

    let options = AvatarOptions::default()
        .with_size(config.size)?
        .with_default_image(config.default_image_path);
    let resolver = AvatarResolver::new(options);
    tracing::debug!(
        size = resolver.options().size(),
        default_image = resolver.options().default_image_path(),
        "Resolver ready"
    );

    let avatar = resolver.resolve_avatar(&profile, &config.root_url)?;
    tracing::info!(kind = ?avatar.kind, "Resolved avatar");

    if args.json {
        let response = AvatarResponse::from(avatar);
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{}", avatar.url);
    }

    Ok(())
}

fn read_profile(path: &Path) -> Result<AvatarProfile> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Could not read user from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Could not read user file {}", path.display()))?
    };

    serde_json::from_str(&contents).context("Could not parse user JSON")
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "avatar_cli=debug,avatar_shared=debug"
    } else {
        "avatar_cli=warn,avatar_shared=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
