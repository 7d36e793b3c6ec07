use anyhow::Result;
use clap::Parser;
use coco_quality::cli::{execute_inspect, execute_scan, Cli, Commands, InspectCommandConfig, ScanCommandConfig};
use coco_quality::ScanStatus;
use tracing_subscriber::EnvFilter;

/// 中断時の終了コード（128 + SIGINT）
const EXIT_CANCELLED: i32 = 130;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            annotations,
            images,
            workers,
            batch_size,
            buffer_size,
            timeout_ms,
            output,
            quiet,
        } => {
            let config = ScanCommandConfig {
                annotations,
                images,
                workers,
                batch_size,
                buffer_size,
                timeout_ms,
                output,
                quiet,
            };

            match execute_scan(config).await {
                Ok(ScanStatus::Completed) => {}
                Ok(ScanStatus::Cancelled) => std::process::exit(EXIT_CANCELLED),
                Err(error) => {
                    eprintln!("❌ エラー: {error:#}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Inspect {
            annotations,
            unwanted,
        } => {
            let config = InspectCommandConfig {
                annotations,
                unwanted,
            };

            if let Err(error) = execute_inspect(config) {
                eprintln!("❌ エラー: {error:#}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
