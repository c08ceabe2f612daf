use brainscan::{cli, config, extract_predictions, format_summary, PredictClient};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use brainscan::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Predict { image, output, raw } => {
            println!("🧠 brainscan - predict\n");

            let client = PredictClient::new(config.effective_base_url());
            if cli.verbose {
                println!("POST {}", client.predict_url());
            }

            println!("Analyzing...");
            match client.predict(&image).await {
                Ok(reply) => {
                    println!("✔ Analysis complete\n");
                    println!("{}", reply.display_text());

                    if let brainscan::ServerReply::Json(value) = &reply {
                        if !raw {
                            let predictions = extract_predictions(value);
                            if !predictions.is_empty() {
                                println!("\nRanked predictions:");
                                println!("{}", format_summary(&predictions));
                            }
                        }
                        if let Some(path) = output {
                            let json = serde_json::to_string_pretty(value)?;
                            std::fs::write(&path, json)?;
                            println!("\n✔ Saved reply: {}", path.display());
                        }
                    }
                }
                Err(err) => {
                    eprintln!("✖ {}", err);
                    std::process::exit(1);
                }
            }
        }

        Commands::Health => {
            println!("🧠 brainscan - health check\n");

            let client = PredictClient::new(config.effective_base_url());
            if cli.verbose {
                println!("GET {}", client.health_url());
            }

            match client.health().await {
                Ok(reply) => {
                    println!("✔ Service reachable\n");
                    println!("{}", reply.display_text());
                }
                Err(err) => {
                    eprintln!("✖ {}", err);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ Base URL updated");
            }

            if show {
                println!("Configuration:");
                println!("  base URL: {}", config.base_url);
                println!("  effective base URL: {}", config.effective_base_url());
                println!("  config file: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
