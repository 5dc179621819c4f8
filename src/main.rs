//! Libris Server - Library Management System
//!
//! A Rust REST API server for library management.

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

    let routes = Router::new()
        // Admin
        .route("/admin", get(api::admin::health_check))
        // Circulation
        .route("/book/checkout", post(api::books::check_out_book))
        .route("/book/return", post(api::books::return_book))
        // Books
        .route("/book", post(api::books::add_book))
        .route("/book", get(api::books::search_books))
        .route("/book/:id", get(api::books::get_book))
        .route("/book/:id", put(api::books::update_book))
        .route("/book/:id", delete(api::books::delete_book))
        // Authors
        .route("/author", post(api::authors::add_author))
        .route("/author", get(api::authors::search_authors))
        .route("/author/:id", get(api::authors::get_author))
        .route("/author/:id", put(api::authors::update_author))
        .route("/author/:id", delete(api::authors::delete_author))
        // Customers
        .route("/customer", post(api::customers::add_customer))
        .route("/customer", get(api::customers::search_customers))
        .route("/customer/:id", get(api::customers::get_customer))
        .route("/customer/:id", put(api::customers::update_customer))
        .route("/customer/:id", delete(api::customers::delete_customer))
        // Employees
        .route("/employee/login", post(api::employees::login))
        .route("/employee", post(api::employees::add_employee))
        .route("/employee", get(api::employees::search_employees))
        .route("/employee/:id", get(api::employees::get_employee))
        .route("/employee/:id", put(api::employees::update_employee))
        .route("/employee/:id", delete(api::employees::delete_employee))
        // Managers
        .route("/manager", post(api::managers::add_manager))
        .route("/manager", get(api::managers::search_managers))
        .route("/manager/:id", get(api::managers::get_manager))
        .route("/manager/:id", put(api::managers::update_manager))
        .route("/manager/:id", delete(api::managers::delete_manager))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
