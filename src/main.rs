//! Natter CLI - client for the Natter social spaces API

use clap::{CommandFactory, Parser};

mod bridge;
mod cli;
mod client;
mod config;
mod error;
mod output;
mod session;

use cli::args::GlobalOptions;
use cli::{AuditCommands, Cli, Commands, ConfigCommands, MessageCommands, SpaceCommands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` turns on debug output; otherwise `RUST_LOG` decides, warnings by default.
fn init_logging(debug: bool) {
    let default_filter = if debug { "natter=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { username, password } => {
            cli::session::login(&opts, username, password).await
        }
        Commands::Logout => cli::session::logout(&opts).await,
        Commands::Register { username, password } => {
            cli::session::register(&opts, username, password).await
        }
        Commands::Space(space_cmd) => match space_cmd {
            SpaceCommands::Create { name, owner } => cli::space::create(&opts, name, owner).await,
            SpaceCommands::AddMember {
                space,
                username,
                role,
            } => cli::space::add_member(&opts, &space, username, role).await,
        },
        Commands::Message(message_cmd) => match message_cmd {
            MessageCommands::Post {
                space,
                message,
                author,
            } => cli::message::post(&opts, &space, message, author).await,
            MessageCommands::List { space, since } => {
                cli::message::list(&opts, &space, since.as_deref()).await
            }
            MessageCommands::Read { uri } => cli::message::read(&opts, &uri).await,
            MessageCommands::Delete { uri } => cli::message::delete(&opts, &uri).await,
        },
        Commands::Audit(AuditCommands::List) => cli::audit::list(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show => cli::config::show(&opts),
            ConfigCommands::SetMode { mode } => cli::config::set_mode(&opts, mode),
            ConfigCommands::SetUrl { url } => cli::config::set_url(&opts, url),
        },
        Commands::Version => {
            println!("natter version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "natter", &mut std::io::stdout());
            Ok(())
        }
    }
}
