//! Command handlers for the CLI.

use clap::Args;
use revdigest_core::{AppConfig, SummaryResult};
use revdigest_pipeline::{PipelineError, ReviewPipeline};
use revdigest_steam::{CollectOptions, SteamClient};
use revdigest_summarizer::{format_bullet_points, select_model, GeminiClient, DEFAULT_MODEL};

/// Arguments for `summarize`. Unset options fall back to the environment
/// configuration.
#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Free-text game name, e.g. "Stardew Valley"
    pub game: String,

    /// How many recent reviews to collect
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub reviews: Option<u64>,

    /// Skip reviews with fewer helpful votes than this
    #[arg(long)]
    pub min_votes: Option<u32>,

    /// Reviews per pole passed to the summarizer
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Print the raw summaries as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

impl SummarizeArgs {
    pub(crate) fn collect_options(&self, base: CollectOptions) -> CollectOptions {
        CollectOptions {
            target: self
                .reviews
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(base.target),
            min_votes: self.min_votes.unwrap_or(base.min_votes),
            retry: base.retry,
        }
    }
}

/// Renders both summaries the way the terminal shows them.
pub(crate) fn render_summaries(result: &SummaryResult) -> String {
    format!(
        "{}\n\n{}",
        format_bullet_points(&format!("Positive Summary: {}", result.positive_summary)),
        format_bullet_points(&format!("Negative Summary: {}", result.negative_summary)),
    )
}

/// Runs the full digest for one game and prints it.
///
/// # Errors
///
/// Returns an error if the clients cannot be built, the game does not resolve,
/// or review collection fails.
pub(crate) async fn run_summarize(config: &AppConfig, args: &SummarizeArgs) -> anyhow::Result<()> {
    let pipeline = ReviewPipeline::from_config(config)?;
    let options = args.collect_options(*pipeline.collect_options());
    let pipeline = pipeline
        .with_collect_options(options)
        .with_top_n(args.top_n.unwrap_or(config.top_n));

    let result = match pipeline.run(&args.game).await {
        Ok(result) => result,
        Err(PipelineError::NotFound(game)) => anyhow::bail!("game not found: {game}"),
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_summaries(&result));
    }
    Ok(())
}

/// Prints the app id for `game`.
///
/// # Errors
///
/// Returns an error if the store client cannot be built or nothing matches.
pub(crate) async fn run_resolve(config: &AppConfig, game: &str) -> anyhow::Result<()> {
    let client = SteamClient::with_base_url(
        &config.store_base_url,
        config.request_timeout_secs,
        &config.review_language,
    )?;
    let app_id = client
        .search_app_id(game.trim())
        .await?
        .ok_or_else(|| anyhow::anyhow!("game not found: {game}"))?;
    println!("{app_id}");
    Ok(())
}

/// Lists catalog flash models and marks the one discovery would pick.
///
/// # Errors
///
/// Returns an error if the catalog cannot be fetched.
pub(crate) async fn run_models(config: &AppConfig) -> anyhow::Result<()> {
    let client = GeminiClient::with_base_url(
        &config.gemini_api_key,
        &config.gemini_base_url,
        config.request_timeout_secs,
    )?;
    let models = client.fetch_models().await?;
    let selected = select_model(&models).map(|m| m.name.as_str());

    for model in models.iter().filter(|m| m.name.contains("flash")) {
        let marker = if Some(model.name.as_str()) == selected {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {} [{}]",
            model.name,
            model.supported_generation_methods.join(", ")
        );
    }

    match (&config.gemini_model, selected) {
        (Some(fixed), _) => println!("configured override: {fixed}"),
        (None, Some(name)) => println!("selected: {name}"),
        (None, None) => println!("selected: {DEFAULT_MODEL} (fallback)"),
    }
    Ok(())
}
