use clap::Parser;
use homework_bot::adapter::inbound::cli::{run, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = run::execute(cli).await {
        eprintln!("homework-bot: {e}");
        std::process::exit(1);
    }
}
