use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use config::AppConfig;

use crate::output;

#[derive(Args)]
pub struct InitArgs {
    #[arg(short, long, help = "Directory to initialize (defaults to current)")]
    pub path: Option<PathBuf>,

    #[arg(
        long,
        help = "Reverse-DNS application identifier",
        default_value = "com.example.app"
    )]
    pub app_id: String,

    #[arg(long, help = "Application display name", default_value = "My App")]
    pub app_name: String,

    #[arg(
        long,
        help = "Directory containing the built web application",
        default_value = "dist"
    )]
    pub web_dir: String,

    #[arg(long, help = "Force overwrite existing hullpack.config.json")]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    if !utils::is_valid_app_id(&args.app_id) {
        bail!(
            "appId {:?} does not match reverse-DNS package naming (e.g. com.example.app)",
            args.app_id
        );
    }

    let target_dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    let config_file = target_dir.join("hullpack.config.json");

    if config_file.exists() && !args.force {
        output::warn(&format!(
            "Config already exists at {}",
            config_file.display()
        ));
        output::info("Use --force to overwrite");
        return Ok(());
    }

    let config = AppConfig {
        app_id: args.app_id.clone(),
        app_name: args.app_name.clone(),
        web_dir: args.web_dir.clone(),
        ..Default::default()
    };

    let mut contents =
        serde_json::to_string_pretty(&config).context("Failed to serialize starter config")?;
    contents.push('\n');

    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    fs::write(&config_file, contents)
        .with_context(|| format!("Failed to write {}", config_file.display()))?;

    println!(
        "{} Initialized hullpack at {}",
        "✓".green().bold(),
        config_file.display()
    );

    println!("\n{}", "Configuration:".bold());
    output::field("appId", &args.app_id);
    output::field("appName", &args.app_name);
    output::field("webDir", &args.web_dir);

    println!(
        "\nNext: build your web app into {:?}, then run {}",
        args.web_dir,
        "hullpack validate".bold()
    );

    Ok(())
}
