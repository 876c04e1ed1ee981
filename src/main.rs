use clap::Parser;
use red_solo_cup::core::ConfigProvider;
use red_solo_cup::domain::ports::RecipeSource;
use red_solo_cup::utils::{logger, validation::Validate};
use red_solo_cup::{CliConfig, CocktailDbClient, CupError, CupSession, YouTubeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting red-solo-cup");
    tracing::debug!(
        "Recipe source: {}, cup size: {} oz, max results: {}",
        config.api_endpoint(),
        config.cup_size_oz(),
        config.max_results()
    );

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let session = CupSession::new(
        CocktailDbClient::from_config(&config),
        YouTubeClient::from_config(&config),
        config.cup_size_oz(),
    );

    if let Err(e) = run(&config, &session).await {
        tracing::error!("red-solo-cup failed: {} (Category: {:?})", e, e.category());
        exit_with(&e);
    }

    Ok(())
}

async fn run(
    config: &CliConfig,
    session: &CupSession<CocktailDbClient, YouTubeClient>,
) -> red_solo_cup::Result<()> {
    if config.list_ingredients {
        for name in session.recommender().source().ingredient_catalog().await? {
            println!("{}", name);
        }
        return Ok(());
    }

    if config.list_mixers {
        let mixers = session.recommender().compatible_mixers(&config.alcohols).await;
        if mixers.is_empty() {
            println!("No mixers found for {}.", config.alcohols.join(", "));
        }
        for mixer in mixers {
            println!("{}", mixer);
        }
        return Ok(());
    }

    let prefs = config.preferences()?;
    let reports = session.recommendations(&prefs, config.max_results()).await?;
    if reports.is_empty() {
        println!("No drinks found with those ingredients. Try another alcohol or fewer mixers.");
        return Ok(());
    }

    let chosen = session.select(&reports, config.select).await?;

    if config.json {
        let output = serde_json::json!({
            "recommendations": reports,
            "selected": chosen,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Recommended drinks:\n");
    for (position, report) in reports.iter().enumerate() {
        println!("{}", report.render_summary(position + 1));
    }
    println!("{}", chosen.render_detail());
    if chosen.tutorial.as_ref().is_some_and(|t| t.api_key_missing) {
        println!("Set YOUTUBE_API_KEY to embed a tutorial video.");
    }

    Ok(())
}

fn exit_with(e: &CupError) -> ! {
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
