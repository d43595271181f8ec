// src/main.rs

use runwrap::{cli, exit_code, logging, run};

#[tokio::main]
async fn main() {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("runwrap error: {err:?}");
        std::process::exit(2);
    }

    let outcome = run(args).await;
    if let Err(err) = &outcome {
        eprintln!("runwrap: {err}");
    }
    std::process::exit(exit_code(&outcome));
}
