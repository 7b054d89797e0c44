//! Poll-based lobby chat server.
//!
//! Keeps lobbies, messages and senders in memory, or in SQLite when a database
//! URL is given.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chanoma-server
//! cargo run --bin chanoma-server -- --host 0.0.0.0 --port 3000
//! cargo run --bin chanoma-server -- --database-url "sqlite://chat.db?mode=rwc"
//! ```

use std::sync::Arc;

use chanoma_server::{
    domain::LobbyRepository,
    infrastructure::repository::{InMemoryLobbyRepository, SqliteLobbyRepository},
    ui::Server,
    usecase::{
        CreateLobbyUseCase, EnterLobbyUseCase, FetchLobbyViewUseCase, LobbyExistsUseCase,
        PostMessageUseCase, SetTypingUseCase, WriteLocks,
    },
};
use chanoma_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chanoma-server")]
#[command(about = "Poll-based lobby chat server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "CHANOMA_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "CHANOMA_PORT", default_value = "8080")]
    port: u16,

    /// SQLite database URL; state is kept in memory when omitted
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Default log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Initialize dependencies in order:
    // 1. Repository
    // 2. Shared locks and clock
    // 3. UseCases
    // 4. Server

    // 1. Create Repository
    let repository: Arc<dyn LobbyRepository> = match &args.database_url {
        Some(url) => match SqliteLobbyRepository::connect(url).await {
            Ok(repository) => {
                tracing::info!("Using SQLite store at {}", url);
                Arc::new(repository)
            }
            Err(e) => {
                tracing::error!("Failed to open database {}: {}", url, e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("Using in-memory store");
            Arc::new(InMemoryLobbyRepository::new())
        }
    };

    // 2. One lock per entity collection, shared by every use case
    let locks = Arc::new(WriteLocks::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // 3. Create UseCases
    let create_lobby_usecase = Arc::new(CreateLobbyUseCase::new(
        repository.clone(),
        locks.clone(),
        clock.clone(),
    ));
    let post_message_usecase = Arc::new(PostMessageUseCase::new(
        repository.clone(),
        locks.clone(),
        clock.clone(),
    ));
    let enter_lobby_usecase = Arc::new(EnterLobbyUseCase::new(repository.clone(), locks.clone()));
    let set_typing_usecase = Arc::new(SetTypingUseCase::new(repository.clone(), locks.clone()));
    let lobby_exists_usecase = Arc::new(LobbyExistsUseCase::new(repository.clone()));
    let fetch_lobby_view_usecase = Arc::new(FetchLobbyViewUseCase::new(repository.clone()));

    // 4. Create and run the server
    let server = Server::new(
        create_lobby_usecase,
        post_message_usecase,
        enter_lobby_usecase,
        set_typing_usecase,
        lobby_exists_usecase,
        fetch_lobby_view_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
