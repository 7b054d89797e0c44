//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::usecase::{
    CreateLobbyUseCase, EnterLobbyUseCase, FetchLobbyViewUseCase, LobbyExistsUseCase,
    PostMessageUseCase, SetTypingUseCase,
};

use super::{
    handler::{
        create_lobby, enter_lobby, fetch_lobby_view, health_check, lobby_exists, post_message,
        update_typing,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Lobby chat HTTP server
///
/// This struct encapsulates the use cases the routes dispatch to and provides
/// methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     create_lobby_usecase,
///     post_message_usecase,
///     enter_lobby_usecase,
///     set_typing_usecase,
///     lobby_exists_usecase,
///     fetch_lobby_view_usecase,
/// );
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    create_lobby_usecase: Arc<CreateLobbyUseCase>,
    post_message_usecase: Arc<PostMessageUseCase>,
    enter_lobby_usecase: Arc<EnterLobbyUseCase>,
    set_typing_usecase: Arc<SetTypingUseCase>,
    lobby_exists_usecase: Arc<LobbyExistsUseCase>,
    fetch_lobby_view_usecase: Arc<FetchLobbyViewUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        create_lobby_usecase: Arc<CreateLobbyUseCase>,
        post_message_usecase: Arc<PostMessageUseCase>,
        enter_lobby_usecase: Arc<EnterLobbyUseCase>,
        set_typing_usecase: Arc<SetTypingUseCase>,
        lobby_exists_usecase: Arc<LobbyExistsUseCase>,
        fetch_lobby_view_usecase: Arc<FetchLobbyViewUseCase>,
    ) -> Self {
        Self {
            create_lobby_usecase,
            post_message_usecase,
            enter_lobby_usecase,
            set_typing_usecase,
            lobby_exists_usecase,
            fetch_lobby_view_usecase,
        }
    }

    /// Build the router with all routes, request tracing and permissive CORS
    pub fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            create_lobby_usecase: self.create_lobby_usecase,
            post_message_usecase: self.post_message_usecase,
            enter_lobby_usecase: self.enter_lobby_usecase,
            set_typing_usecase: self.set_typing_usecase,
            lobby_exists_usecase: self.lobby_exists_usecase,
            fetch_lobby_view_usecase: self.fetch_lobby_view_usecase,
        });

        Router::new()
            .route("/lobby/{lobby_id}", get(fetch_lobby_view))
            .route("/lobbyExists/{lobby_id}", get(lobby_exists))
            .route("/createLobby", post(create_lobby))
            .route("/postMessage", post(post_message))
            .route("/enterLobby", post(enter_lobby))
            .route("/updateTyping", post(update_typing))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(app_state)
    }

    /// Run the server on `host:port` until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> std::io::Result<()> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        tracing::info!("Lobby chat server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
