use clap::Parser;
use hello_front::backend;
use hello_front::utils::{logger, validation};

#[derive(Parser)]
#[command(name = "hello-backend")]
#[command(about = "Demo backend serving the /api/hello greeting")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    if let Err(e) = validation::validate_listen_addr("listen", &args.listen) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("🚀 Starting hello-backend");

    if let Err(e) = backend::serve(&args.listen).await {
        tracing::error!("❌ Backend failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
