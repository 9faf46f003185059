use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{State, WebSocketUpgrade},
    http::StatusCode,
    response::{Html, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

use super::assets;
use super::websocket::handle_websocket;
use crate::queue::Ticket;
use crate::session::{CinemaSession, DisplaySnapshot};

#[derive(Debug, Default, Deserialize)]
pub struct EnqueueRequest {
    #[serde(default)]
    pub vip: bool,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub ticket: Option<Ticket>,
    pub state: DisplaySnapshot,
}

#[derive(Clone)]
pub struct WebServer {
    pub port: u16,
    pub host: String,
    pub session: Arc<CinemaSession>,
}

impl WebServer {
    pub fn new(port: u16, host: String, session: Arc<CinemaSession>) -> Self {
        Self {
            port,
            host,
            session,
        }
    }

    pub async fn start(&self) -> Result<()> {
        let app = self.create_app();
        // Convert localhost to 127.0.0.1 for proper parsing
        let host = if self.host == "localhost" {
            "127.0.0.1"
        } else {
            &self.host
        };
        let addr: SocketAddr = format!("{}:{}", host, self.port).parse()?;

        info!(
            "🌐 Starting web server on http://{}:{}",
            self.host, self.port
        );

        let listener = TcpListener::bind(addr).await?;

        info!(
            "🚀 Web server ready and listening on http://{}:{}",
            self.host, self.port
        );

        axum::serve(listener, app).await?;

        Ok(())
    }

    pub fn create_app(&self) -> Router {
        Router::new()
            .route("/", get(serve_index))
            .route("/ws", get(websocket_handler))
            .route("/api/state", get(get_state))
            .route("/api/enqueue", post(enqueue))
            .route("/api/serve", post(serve))
            .route("/api/reset", post(reset))
            .route("/api/theme", post(set_theme))
            .with_state(self.session.clone())
            .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
    }
}

async fn serve_index() -> Html<&'static str> {
    info!("📄 Serving index.html to client");
    Html(assets::INDEX_HTML)
}

async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(session): State<Arc<CinemaSession>>,
) -> Response {
    info!("🔌 WebSocket upgrade request received");
    ws.on_upgrade(move |socket| handle_websocket(socket, session))
}

async fn get_state(State(session): State<Arc<CinemaSession>>) -> Json<DisplaySnapshot> {
    Json(session.snapshot().await)
}

async fn enqueue(
    State(session): State<Arc<CinemaSession>>,
    request: Option<Json<EnqueueRequest>>,
) -> Json<ActionResponse> {
    let vip = request.map(|Json(r)| r.vip).unwrap_or_default();
    let ticket = session.admit_random(vip).await;
    info!("📥 Enqueue API request: ticket #{}", ticket.id());

    Json(ActionResponse {
        ticket: Some(ticket),
        state: session.snapshot().await,
    })
}

async fn serve(State(session): State<Arc<CinemaSession>>) -> Json<ActionResponse> {
    let ticket = session.serve_next().await;
    match &ticket {
        Some(ticket) => info!("🎟️ Serve API request: ticket #{}", ticket.id()),
        None => info!("🎟️ Serve API request: line is empty"),
    }

    Json(ActionResponse {
        ticket,
        state: session.snapshot().await,
    })
}

async fn reset(State(session): State<Arc<CinemaSession>>) -> Json<DisplaySnapshot> {
    info!("🧹 Reset API request");
    session.reset().await;
    Json(session.snapshot().await)
}

async fn set_theme(
    State(session): State<Arc<CinemaSession>>,
    Json(request): Json<ThemeRequest>,
) -> Result<Json<DisplaySnapshot>, (StatusCode, String)> {
    match session.set_theme(&request.id).await {
        Some(_) => Ok(Json(session.snapshot().await)),
        None => {
            tracing::warn!("❌ Unknown theme requested: {}", request.id);
            Err((
                StatusCode::BAD_REQUEST,
                format!("Unknown theme: {}", request.id),
            ))
        }
    }
}
