// src/server/mod.rs
//
// Local chart server: one page with a file dropdown, one JSON figure endpoint.
// Runs on a current-thread tokio runtime; every figure is rebuilt per request.

mod page;

use std::{path::PathBuf, sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use crate::{
    chart::{self, Figure},
    config::{
        AppOptions,
        options::{AnalyzeOptions, ServeOptions},
    },
    corpus,
    error::{Error, Result},
    file,
    nlp::Analyzer,
    store::{self, StoredFile},
};

/// Everything the handlers need, built once before serving.
pub struct ServerContext {
    pub store_dir: PathBuf,
    pub files: Vec<StoredFile>,
    pub default_file: String,
    pub serve: ServeOptions,
    pub analyze: AnalyzeOptions,
    pub analyzer: Analyzer,
}

impl ServerContext {
    pub fn new(files: Vec<StoredFile>, serve: ServeOptions, analyze: AnalyzeOptions) -> Self {
        Self {
            store_dir: serve.store_dir.clone(),
            default_file: serve.default_file.clone(),
            files,
            serve,
            analyze,
            analyzer: Analyzer::default(),
        }
    }

    /// List the storage folder named in `opts.serve`.
    pub fn from_options(opts: &AppOptions) -> Result<Self> {
        let files = store::list_stored(&opts.serve.store_dir)?;
        if !files.iter().any(|f| f.file_name == opts.serve.default_file) {
            log::warn!(
                "Serve: default file {} not in {}",
                opts.serve.default_file,
                opts.serve.store_dir.display()
            );
        }
        Ok(Self::new(files, opts.serve.clone(), opts.analyze.clone()))
    }

    pub fn figure_for(&self, file_name: &str) -> Result<Figure> {
        let stored = store::find(&self.files, file_name)?;
        let corpus = corpus::build_corpus(&stored.path, &self.analyze, &self.analyzer)?;
        chart::build_chart(&corpus, self.analyze.top_n)
    }
}

pub fn router(ctx: Arc<ServerContext>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/figure", get(figure))
        .route("/files", get(files))
        .with_state(ctx)
}

/// Blocking entry point for the CLI.
pub fn run(ctx: ServerContext) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    rt.block_on(serve(ctx))
}

pub async fn serve(ctx: ServerContext) -> Result<()> {
    let addr = format!("{}:{}", ctx.serve.host, ctx.serve.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let url = ctx.serve.url();
    log::info!("Serve: {} file(s) from {} at {url}", ctx.files.len(), ctx.store_dir.display());

    if ctx.serve.open_browser {
        let delay = Duration::from_millis(ctx.serve.browser_delay_ms);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = file::open_in_system(&url) {
                log::warn!("Serve: could not open browser: {e}");
            }
        });
    }

    axum::serve(listener, router(Arc::new(ctx))).await?;
    Ok(())
}

/* ---------- handlers ---------- */

#[derive(Debug, Default, Deserialize)]
pub struct FigureQuery {
    pub file: Option<String>,
}

async fn index(State(ctx): State<Arc<ServerContext>>) -> Html<String> {
    Html(page::render(&ctx.files, &ctx.default_file))
}

async fn figure(
    State(ctx): State<Arc<ServerContext>>,
    Query(q): Query<FigureQuery>,
) -> std::result::Result<Json<Figure>, ApiError> {
    let name = q.file.filter(|f| !f.is_empty()).unwrap_or_else(|| ctx.default_file.clone());
    match ctx.figure_for(&name) {
        Ok(fig) => Ok(Json(fig)),
        Err(e) => {
            log::error!("Serve: figure for {name}: {e}");
            Err(ApiError::from(e))
        }
    }
}

async fn files(State(ctx): State<Arc<ServerContext>>) -> Json<Vec<StoredFile>> {
    Json(ctx.files.clone())
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        let status = match e {
            Error::UnknownFile(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self { status, message: e.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}
