use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = mypage::cli::Cli::parse();

    if let Err(err) = mypage::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
