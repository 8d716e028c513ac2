use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use persona_gen::constants::{DEFAULT_COMMENT_LIMIT, DEFAULT_POST_LIMIT, PREVIEW_LEN};
use persona_gen::error::PersonaError;
use persona_gen::generation::OpenAiGenerator;
use persona_gen::output::write_persona;
use persona_gen::processing::extract_identifier;
use persona_gen::source::{DataSource, RedditClient};
use persona_gen::{synthesis, tracing_init};

#[derive(Parser)]
#[command(
    name = "persona-gen",
    version,
    about = "Generate a personality profile from Reddit user data"
)]
struct App {
    /// Reddit user profile URL or username
    reddit_url: String,

    /// Number of posts to analyze
    #[arg(long, default_value_t = DEFAULT_POST_LIMIT)]
    posts: usize,

    /// Number of comments to analyze
    #[arg(long, default_value_t = DEFAULT_COMMENT_LIMIT)]
    comments: usize,

    /// Output directory for persona files
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() {
    tracing_init::init();

    // User-initiated interruption is a clean exit
    ctrlc::set_handler(|| {
        tracing::info!("Process interrupted by user");
        std::process::exit(0);
    })
    .ok();

    let app = App::parse();
    if let Err(e) = run(app) {
        tracing::error!(error = %e, "Persona generation failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(app: App) -> Result<()> {
    let username = extract_identifier(Some(app.reddit_url.as_str()))
        .ok_or_else(|| PersonaError::Identifier(app.reddit_url.clone()))?;

    tracing::info!(username, "Starting persona generation");

    let client = RedditClient::from_env()?;
    let dataset = client.fetch_user_data(&username, app.posts, app.comments)?;

    if dataset.is_empty() {
        tracing::warn!(username, "No posts or comments found for this user");
        println!("Warning: No public posts or comments found for analysis");
    }

    tracing::info!("Generating persona...");
    let synthesizer = synthesis::for_generator(OpenAiGenerator::from_env());
    let persona = synthesizer.synthesize(&dataset);

    let filepath = write_persona(&persona, &username, &app.output_dir)?;

    println!("\nPersona generation completed!");
    println!("Saved to: {}", filepath.display());
    println!("User: u/{username}");
    println!(
        "Analyzed: {} posts, {} comments",
        dataset.post_count(),
        dataset.comment_count()
    );

    println!("\nPreview:");
    println!("{}", "-".repeat(50));
    if persona.chars().count() > PREVIEW_LEN {
        let head: String = persona.chars().take(PREVIEW_LEN).collect();
        println!("{head}...");
    } else {
        println!("{persona}");
    }

    Ok(())
}
