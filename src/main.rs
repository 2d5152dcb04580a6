use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing::info;

use robird::cli::{parse_args, usage, CliCommand, RunOptions, VERSION};
use robird::config::StreamConfig;
use robird::{logging, startup};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    match parse_args(std::env::args())? {
        CliCommand::Version => {
            println!("robird {}", VERSION);
            Ok(())
        }
        CliCommand::Help => {
            print!("{}", usage());
            Ok(())
        }
        CliCommand::Run(options) => run(options).await,
    }
}

async fn run(options: RunOptions) -> Result<()> {
    logging::init().wrap_err("Failed to initialize logging")?;

    let mut config = StreamConfig::from_env()?;
    if let Some(store) = options.store {
        config = config.with_store_path(store);
    }
    if let Some(account) = options.account {
        config = config.with_account_path(account);
    }

    let session = startup::launch(&config)
        .await
        .wrap_err("Failed to set up the stream session")?;
    session.start();

    tokio::signal::ctrl_c()
        .await
        .wrap_err("Failed to listen for Ctrl-C")?;
    info!("Interrupted, stopping stream");

    session.stop();
    let stats = session.join().await;
    println!("robird: {}", stats);
    Ok(())
}
