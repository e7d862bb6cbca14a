// SPDX-License-Identifier: MPL-2.0
//! Static asset host.
//!
//! Serves the site's files from a root directory. `/`, `/404` and `/debug`
//! map to their documents, any other path is looked up on disk, and paths
//! that match nothing get `404.html` with a 404 status. Failures while
//! answering, panics included, produce a generic 500 page and the process
//! keeps running.

use crate::config::{ServerConfig, DEBUG_DOCUMENT, INDEX_DOCUMENT, NOT_FOUND_DOCUMENT};
use crate::error::Result;
use axum::{
    extract::State,
    handler::Handler,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::any::Any;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

/// Body of every 500 response.
pub const INTERNAL_ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Erro 500</title>
    <style>
        body { font-family: Arial, sans-serif; background: #0d1117; color: #ffffff; text-align: center; padding: 50px; }
        h1 { color: #ff6b6b; }
        a { color: #00fffb; text-decoration: none; }
        a:hover { text-decoration: underline; }
    </style>
</head>
<body>
    <h1>500 - Erro Interno do Servidor</h1>
    <p>Algo deu errado no servidor.</p>
    <a href="/">← Voltar ao Início</a>
</body>
</html>
"#;

type SharedRoot = Arc<PathBuf>;

/// Builds the complete router for the site rooted at `root`.
pub fn router(root: impl Into<PathBuf>) -> Router {
    with_layers(site_routes(root.into()))
}

fn site_routes(root: PathBuf) -> Router {
    let root: SharedRoot = Arc::new(root);
    // Any method that matches nothing ends up at the 404 document
    let missing = not_found.with_state(Arc::clone(&root));
    let static_files = ServeDir::new(root.as_path())
        .not_found_service(missing)
        .call_fallback_on_method_not_allowed(true);

    Router::new()
        .route("/", get(index).fallback(not_found))
        .route("/404", get(error_page).fallback(not_found))
        .route("/debug", get(debug_page).fallback(not_found))
        .fallback_service(static_files)
        .with_state(root)
}

fn with_layers(router: Router) -> Router {
    router
        .layer(middleware::map_response(error_body))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Binds `0.0.0.0:<port>` and serves until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    log_banner(&listener.local_addr()?, &config.root);

    axum::serve(listener, router(config.root.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

fn log_banner(addr: &SocketAddr, root: &Path) {
    let started = chrono::Local::now().format("%d/%m/%Y %H:%M:%S");
    info!(
        url = %format!("http://localhost:{}", addr.port()),
        root = %root.display(),
        %started,
        "portfolio server started"
    );
    info!("routes: / (portfolio), /404 (error page), /debug (debug page)");
    if addr.port() < 1024 {
        info!(port = addr.port(), "privileged port, may require elevated permissions");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown requested");
}

async fn index(State(root): State<SharedRoot>) -> Response {
    document(&root, INDEX_DOCUMENT, StatusCode::OK).await
}

async fn error_page(State(root): State<SharedRoot>) -> Response {
    document(&root, NOT_FOUND_DOCUMENT, StatusCode::OK).await
}

async fn debug_page(State(root): State<SharedRoot>) -> Response {
    document(&root, DEBUG_DOCUMENT, StatusCode::OK).await
}

async fn not_found(State(root): State<SharedRoot>) -> Response {
    document(&root, NOT_FOUND_DOCUMENT, StatusCode::NOT_FOUND).await
}

/// Reads `name` from `root` and answers with it, or with the 500 page.
async fn document(root: &Path, name: &str, status: StatusCode) -> Response {
    let path = root.join(name);
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "could not read document");
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
}

/// Gives every 500 the generic error page, whichever layer produced it.
async fn error_body(response: Response) -> Response {
    if response.status() == StatusCode::INTERNAL_SERVER_ERROR {
        internal_error()
    } else {
        response
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail, "request handler panicked");
    internal_error()
}
