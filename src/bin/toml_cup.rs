use clap::Parser;
use red_solo_cup::core::ConfigProvider;
use red_solo_cup::utils::{logger, validation::Validate};
use red_solo_cup::{CocktailDbClient, CupError, CupSession, TomlConfig, YouTubeClient};

#[derive(Parser)]
#[command(name = "toml-cup")]
#[command(about = "Cocktail recommendations driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "red-solo-cup.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override `recommend.select` from the config
    #[arg(long)]
    select: Option<usize>,

    /// Show the loaded configuration without contacting any API
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(select) = args.select {
        config.recommend.select = Some(select);
        tracing::info!("Selection overridden to: {}", select);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }

    display_config_summary(&config);
    if args.dry_run {
        return Ok(());
    }

    if let Err(e) = run(&config).await {
        tracing::error!("toml-cup failed: {} (Category: {:?})", e, e.category());
        exit_with(&e);
    }

    Ok(())
}

async fn run(config: &TomlConfig) -> red_solo_cup::Result<()> {
    let session = CupSession::new(
        CocktailDbClient::from_config(config),
        YouTubeClient::from_config(config),
        config.cup_size_oz(),
    );

    let prefs = config.preferences();
    let reports = session.recommendations(&prefs, config.max_results()).await?;
    if reports.is_empty() {
        println!("No drinks found with those ingredients. Try another alcohol or fewer mixers.");
        return Ok(());
    }

    for (position, report) in reports.iter().enumerate() {
        println!("{}", report.render_summary(position + 1));
    }
    let chosen = session.select(&reports, config.select()).await?;
    println!("{}", chosen.render_detail());
    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Configuration Summary:");
    println!("  Source: {}", config.api_endpoint());
    println!("  Cup size: {} oz", config.cup_size_oz());
    println!("  Alcohols: {}", config.preferences.alcohols.join(", "));
    if !config.preferences.mixers.is_empty() {
        println!("  Mixers: {}", config.preferences.mixers.join(", "));
    }
    println!("  Weight: {} lbs", config.preferences.weight_lbs);
    println!("  Max results: {}, showing #{}", config.max_results(), config.select());
    println!(
        "  Tutorial videos: {}",
        if config.youtube_api_key().is_some() { "enabled" } else { "search link only" }
    );
    println!();
}

fn exit_with(e: &CupError) -> ! {
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
