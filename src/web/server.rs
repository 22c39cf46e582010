use axum::{
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::fmt::Display;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::cli::ServeArgs;
use crate::core::query::{GeneQuery, LdQuery, VariantQuery};
use crate::filter::expression::parse_recomb_filter;
use crate::filter::genes::filter_genes;
use crate::filter::ld::filter_ld;
use crate::filter::recomb::filter_recomb;
use crate::filter::variants::{read_variants, VariantSourceError};
use crate::store::dataset::{DatasetStore, VariantSource};
use crate::web::envelope::{
    ErrorResponse, GenesEnvelope, LdEnvelope, RecombEnvelope, VariantEnvelope,
};

/// Requests allowed per second per client IP
pub const RATE_LIMIT_PER_SECOND: u64 = 10;
/// Burst allowance on top of the steady rate
pub const RATE_LIMIT_BURST: u32 = 50;
/// Maximum requests served at once
pub const MAX_CONCURRENT_REQUESTS: usize = 100;
/// Requests taking longer than this are answered with 408
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state
pub struct AppState {
    pub store: DatasetStore,
}

impl AppState {
    pub fn new(store: DatasetStore) -> Self {
        Self { store }
    }
}

#[derive(Deserialize)]
struct RecombParams {
    filter: String,
}

/// Log the failure server-side and answer with `{error}`.
pub fn error_response(status: StatusCode, error: &dyn Display) -> Response {
    tracing::error!("Request failed ({}): {}", status, error);
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the datasets cannot be loaded, the tokio runtime
/// cannot be created, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
///
/// Rate limiting is not part of this router since it needs the peer address;
/// [`run`] adds it on top.
///
/// # Errors
///
/// Returns an error if `allow_origin` is not a valid header value.
pub fn create_router(state: Arc<AppState>, allow_origin: &str) -> anyhow::Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_str(allow_origin)?)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    let app = Router::new()
        .route("/genes", get(genes_handler))
        .route(
            "/ld/genome_builds/{build}/references/{reference}/populations/{population}/variants",
            get(ld_handler),
        )
        .route("/recomb", get(recomb_handler))
        .route("/pandas/genes", get(variants_handler))
        .route("/pandas/test/genes", get(test_variants_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(cors)
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    REQUEST_TIMEOUT,
                ))
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS)),
        );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    // Datasets must be in memory before the listener binds
    let store = DatasetStore::load(&args.data.paths())?;
    let state = Arc::new(AppState::new(store));

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(RATE_LIMIT_PER_SECOND)
        .burst_size(RATE_LIMIT_BURST)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limit configuration"))?;

    let app = create_router(state, &args.allow_origin)?.layer(GovernorLayer {
        config: Arc::new(governor_conf),
    });

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting locus-server at http://{addr}");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Genes overlapping the requested window
async fn genes_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GeneQuery>,
) -> Response {
    let genes = filter_genes(state.store.genes(), &query);
    debug!(matches = genes.len(), "Gene query");
    Json(GenesEnvelope::new(genes, state.store.gene_meta())).into_response()
}

/// LD partners of one variant. The build, reference and population path
/// segments are part of the client's URL scheme; a single local LD set is
/// served for all of them.
async fn ld_handler(
    State(state): State<Arc<AppState>>,
    Path((build, reference, population)): Path<(String, String, String)>,
    Query(query): Query<LdQuery>,
) -> Response {
    let entries = filter_ld(state.store.ld_pairs(), &query);
    debug!(
        %build,
        %reference,
        %population,
        variant = %query.variant,
        matches = entries.len(),
        "LD query"
    );
    Json(LdEnvelope::new(entries)).into_response()
}

/// Recombination rows matching a filter expression. A bad expression is
/// reported inside the envelope, not as an HTTP error.
async fn recomb_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecombParams>,
) -> Response {
    let meta = state.store.recomb_meta();
    let envelope = match parse_recomb_filter(&params.filter) {
        Ok(filter) => RecombEnvelope::success(filter_recomb(state.store.recomb(), &filter), meta),
        Err(e) => {
            warn!(filter = %params.filter, error = %e, "Rejected recomb filter");
            RecombEnvelope::failure(e.to_string(), meta)
        }
    };
    Json(envelope).into_response()
}

async fn variants_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VariantQuery>,
) -> Response {
    query_variants(&state, VariantSource::Main, query).await
}

async fn test_variants_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VariantQuery>,
) -> Response {
    query_variants(&state, VariantSource::Test, query).await
}

/// Stream a variant source on the blocking pool and shape the result.
async fn query_variants(state: &AppState, source: VariantSource, query: VariantQuery) -> Response {
    let Some(path) = state.store.variant_source(source).map(std::path::Path::to_path_buf) else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &VariantSourceError::NotConfigured,
        );
    };

    let result = tokio::task::spawn_blocking(move || read_variants(&path, &query))
        .await
        .map_err(|e| VariantSourceError::Task(e.to_string()))
        .and_then(|result| result);

    match result {
        Ok(variants) => {
            info!(?source, matches = variants.len(), "Variant query");
            Json(VariantEnvelope::new(variants)).into_response()
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e),
    }
}
