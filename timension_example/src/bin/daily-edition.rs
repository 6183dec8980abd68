use anyhow::Result;
use timension::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let app = Timension::builder().build()?;

    println!("Timension Daily Edition");
    println!("=======================");
    println!();

    if !app.has_credential() {
        println!("No credential resolved. Set GEMINI_API_KEY and run again.");
        return Ok(());
    }

    print!("Checking connectivity... ");
    if app.test_connectivity().await {
        println!("✓");
    } else {
        println!("✗ (service rejected the credential or is unreachable)");
        return Ok(());
    }
    println!();

    match app.daily_edition().await {
        Some(edition) => {
            println!("{}", edition.headline);
            println!("{}", edition.date);
            println!();
            println!("{}", edition.content);
            println!();
            println!("Weather: {}", edition.weather);
            match edition.image_url.strip_prefix("data:") {
                Some(rest) => {
                    let mime = rest.split(';').next().unwrap_or("unknown");
                    println!("Front page image: inline {} payload", mime);
                }
                None => println!("Front page image: default ({})", edition.image_url),
            }
        }
        None => println!("No edition today — the copy desk was unreachable."),
    }

    Ok(())
}
