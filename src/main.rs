use mealie_client::client::MealieClient;
use mealie_client::composables::use_tools;
use mealie_client::config::ClientConfig;
use mealie_client::utils::{download_as_json, title_case};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: mealie-client [check | tools [OUTPUT.json] | export RECIPE_SLUG]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    let mut client = MealieClient::from_config(&config)?;

    if config.api_token.is_none() {
        match config.credentials() {
            Some((username, password)) => {
                tracing::info!("Validating Mealie credentials...");
                if let Err(e) = client.authenticate(username.clone(), password).await {
                    tracing::error!("Authentication failed: {}", e);
                    tracing::error!("Please verify:");
                    tracing::error!("  - MEALIE_BASE_URL is correct: {}", config.base_url);
                    tracing::error!("  - MEALIE_USERNAME is correct: {}", username);
                    tracing::error!("  - MEALIE_PASSWORD is correct");
                    tracing::error!("  - Mealie server is running and accessible");
                    std::process::exit(1);
                }
            }
            None => {
                tracing::warn!("No MEALIE_API_TOKEN or MEALIE_USERNAME/MEALIE_PASSWORD set; continuing unauthenticated");
            }
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("check") => check(&client).await,
        Some("tools") => tools(client, args.get(1).map(PathBuf::from)).await,
        Some("export") => match args.get(1) {
            Some(slug) => export(&client, slug).await,
            None => anyhow::bail!("{}", USAGE),
        },
        Some(_) => anyhow::bail!("{}", USAGE),
    }
}

/// Verifies the token works by fetching the current user's household.
async fn check(client: &MealieClient) -> anyhow::Result<()> {
    tracing::info!("Testing API access with token...");
    let household = client.households.get_current_user_household().await?;
    tracing::info!("API access test passed for household '{}'", household.name);

    match client.households.statistics().await {
        Ok(stats) => tracing::info!(
            "{} recipes, {} tools, {} users",
            stats.total_recipes,
            stats.total_tools,
            stats.total_users
        ),
        Err(e) => tracing::warn!("Could not read household statistics: {}", e),
    }
    Ok(())
}

async fn tools(client: MealieClient, output: Option<PathBuf>) -> anyhow::Result<()> {
    let store = use_tools(client.tools, true).await?;
    for tool in store.items() {
        println!("{}", title_case(&tool.name));
    }

    if let Some(path) = output {
        download_as_json(store.items(), &path)?;
        tracing::info!("Saved {} tools to {}", store.items().len(), path.display());
    }
    Ok(())
}

async fn export(client: &MealieClient, slug: &str) -> anyhow::Result<()> {
    let path = client.recipes.export_zip_url(slug).await?;
    println!("{}{}", client.base_url(), path);
    Ok(())
}
