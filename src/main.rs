//! Libris Server - Library Branch Management System
//!
//! A Rust REST API server for managing a network of library branches.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libris_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Libris Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/login", post(api::auth::login))
        // Authors
        .route("/authors", get(api::authors::list_authors))
        .route("/authors", post(api::authors::create_author))
        .route("/authors/:id", put(api::authors::update_author))
        .route("/authors/:id", delete(api::authors::delete_author))
        // Publishers
        .route("/publishers", get(api::publishers::list_publishers))
        .route("/publishers", post(api::publishers::create_publisher))
        .route("/publishers/:id", put(api::publishers::update_publisher))
        .route("/publishers/:id", delete(api::publishers::delete_publisher))
        // Branches
        .route("/branchs", get(api::branches::list_branches))
        .route("/branchs", post(api::branches::create_branch))
        .route("/branchs/:id", get(api::branches::get_branch))
        .route("/branchs/:id", put(api::branches::update_branch))
        .route("/branchs/:id", delete(api::branches::delete_branch))
        // Staff
        .route("/staffs", get(api::staff::list_staff))
        .route("/staffs", post(api::staff::create_staff))
        .route("/staffs/:id", put(api::staff::update_staff))
        .route("/staffs/:id", delete(api::staff::delete_staff))
        // Members
        .route("/members", get(api::members::list_members))
        .route("/members", post(api::members::create_member))
        .route("/members/:id", put(api::members::update_member))
        .route("/members/:id", delete(api::members::delete_member))
        // Books
        .route("/books", get(api::books::list_books))
        .route("/books", post(api::books::create_book))
        .route("/books/:id", put(api::books::update_book))
        .route("/books/:id", delete(api::books::delete_book))
        // Schedules
        .route("/schedules", get(api::schedules::list_schedules))
        .route("/schedules", post(api::schedules::create_schedule))
        .route("/schedules/:id", delete(api::schedules::delete_schedule))
        // Transactions
        .route("/transactions", get(api::transactions::list_transactions))
        .route("/transactions", post(api::transactions::create_transaction))
        .route("/transactions/item", post(api::transactions::create_transaction_item))
        .route("/transactions/:id/items", get(api::transactions::list_transaction_items))
        .route("/transactions/:id", put(api::transactions::update_transaction))
        .route("/transactions/:id", delete(api::transactions::delete_transaction))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
