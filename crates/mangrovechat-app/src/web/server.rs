use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::chat::HistoryStore;
use crate::config::ClientConfig;
use crate::web::routes::{self, AppState};
use mangrovechat_api::{GeminiClient, ModelClient};

/// Web server configuration
pub struct WebServerConfig {
    pub bind_addr: SocketAddr,
    pub client_config: ClientConfig,
}

/// Web server instance
pub struct WebServer {
    bind_addr: SocketAddr,
    state: AppState,
}

impl WebServer {
    /// Create a new web server, constructing the history store and the
    /// Gemini client from the resolved configuration.
    pub fn new(config: WebServerConfig) -> Result<Self> {
        let history = Arc::new(HistoryStore::new(&config.client_config.data_dir)?);
        let model: Arc<dyn ModelClient> = Arc::new(GeminiClient::new(
            config.client_config.api_key.clone(),
            config.client_config.model.clone(),
            config.client_config.api_url.clone(),
        ));

        Ok(Self {
            bind_addr: config.bind_addr,
            state: AppState { history, model },
        })
    }

    /// Start the web server
    pub async fn start(self) -> Result<()> {
        let mut app = routes::create_router(self.state);

        // Add CORS layer for development
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        app = app.layer(cors);

        println!("🌐 Web server starting on http://{}", self.bind_addr);
        println!("   Ask endpoint: http://{}/ask", self.bind_addr);

        let listener = tokio::net::TcpListener::bind(&self.bind_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
