use clap::Parser;
use std::time::Duration;

use laserdisc_catalog::config::ObservabilityConfig;
use laserdisc_catalog::observability::init_logging;
use laserdisc_catalog::selftest::{run_self_test, CatalogClient, SelfTestError};

#[derive(Parser)]
#[command(name = "ld-selftest")]
#[command(about = "Run the list/create/delete smoke test against a laserdisc catalog service", long_about = None)]
struct Cli {
    /// Base URL of the running service.
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Wait this long before the first request.
    #[arg(short, long, default_value_t = 0)]
    delay_ms: u64,

    /// Log level used when RUST_LOG is unset. At `info` every step is
    /// logged as its response arrives.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&ObservabilityConfig {
        log_level: cli.log_level.clone(),
    });

    let client = CatalogClient::new(&cli.url);
    let report = match run_self_test(&client, Duration::from_millis(cli.delay_ms)).await {
        Ok(report) => report,
        Err(e) => {
            // Display already names the failure class.
            eprintln!("{}", e);
            std::process::exit(match e {
                SelfTestError::Transport(_) => 2,
                SelfTestError::Unexpected(_) => 1,
            });
        }
    };

    println!("Lista inicial:");
    println!("{}", serde_json::to_string_pretty(&report.initial)?);
    println!("Creado:");
    println!("{}", serde_json::to_string_pretty(&report.created)?);
    println!("Lista tras crear:");
    println!("{}", serde_json::to_string_pretty(&report.after_create)?);
    println!("Eliminado id: {}", report.created.id);
    println!("Lista final:");
    println!("{}", serde_json::to_string_pretty(&report.after_delete)?);

    Ok(())
}
