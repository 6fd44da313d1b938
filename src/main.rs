use clap::Parser;
use hello_front::utils::{logger, validation::Validate};
use hello_front::{App, CliConfig, HttpBackend};

// The whole UI runs on one event-processing thread; the greeting request
// is its only suspension point.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hello-front");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Startup failures past this point are reported and swallowed; the
    // process still exits cleanly.
    match HttpBackend::from_config(&config) {
        Ok(client) => {
            let displayed = App::mount(client).run().await;
            tracing::info!("Greeting settled: {}", displayed);
        }
        Err(e) => {
            tracing::error!("Failed to start UI: {}", e);
            eprintln!("{}", e);
        }
    }
}
