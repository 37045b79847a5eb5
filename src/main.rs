use log::error;

mod cli;

#[tokio::main]
async fn main() {
    // A missing .env file is fine, the variables may come from the shell
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(e) = cli::run().await {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
