use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::post,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use warden_adapters::config::AllowedOrigins;
use warden_axum::routes::{login, register};
use warden_core::{PasswordHasher, TokenIssuer, UserStore};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Main authentication service that provides the register and login routes
/// and serves the frontend shell
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService from its collaborators
    ///
    /// # Arguments
    /// * `user_store` - Store for user records (must be Clone)
    /// * `hasher` - Password hasher (must be Clone)
    /// * `token_issuer` - Signs session tokens on login (must be Clone)
    /// * `assets_dir` - Directory holding the frontend's `index.html`
    ///
    /// # Note on Architecture
    /// Stores implement Clone via internal Arc for thread-safe sharing.
    /// Each route is given only the state it needs.
    pub fn new<U, H, T>(user_store: U, hasher: H, token_issuer: T, assets_dir: &str) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        T: TokenIssuer + Clone + 'static,
    {
        // Unknown paths fall back to index.html so client-side routes resolve
        let assets_service = ServeDir::new(assets_dir)
            .fallback(ServeFile::new(format!("{assets_dir}/index.html")));

        let router = Router::new()
            // Register needs user store and hasher
            .route("/register", post(register::<U, H>))
            .with_state((user_store.clone(), hasher.clone()))
            // Login additionally needs the token issuer
            .route("/login", post(login::<U, H, T>))
            .with_state((user_store, hasher, token_issuer))
            .fallback_service(assets_service);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .is_ok_and(|origin| allowed_origins.contains(origin))
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server until Ctrl+C
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down auth service");
}
