use axum::{
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeFile};
use tracing::{error, info};

use catalog_api::{
    handlers::{category, health, menu},
    state::AppState,
};
use catalog_core::services::{CategoryService, MenuService};
use catalog_infrastructure::database::connection;
use catalog_infrastructure::{PgCategoryRepository, PgMenuRepository};
use catalog_shared::config::AppConfig;
use catalog_shared::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    catalog_shared::telemetry::init_telemetry();

    info!("Catalog server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database at {}...", config.database.url);
    let pool = connection::create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    info!("Database connection established.");

    // Apply migrations (schema + seed data)
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Wire repositories and services by hand; no container
    let menu_repo = Arc::new(PgMenuRepository::new(pool.clone()));
    let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));

    let state = AppState {
        menu_service: Arc::new(MenuService::new(menu_repo, category_repo.clone())),
        category_service: Arc::new(CategoryService::new(category_repo)),
        config: config.clone(),
    };

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Main view, reachable on both the root and /main
        .route_service("/", ServeFile::new("static/main.html"))
        .route_service("/main", ServeFile::new("static/main.html"))
        // Menu routes
        .route(
            "/api/v1/menus",
            get(menu::list_menus)
                .post(menu::register_menu)
                .put(menu::modify_menu),
        )
        .route(
            "/api/v1/menus/{menu_code}",
            get(menu::get_menu).delete(menu::delete_menu),
        )
        .route("/api/v1/menus/price/{min_price}", get(menu::menus_by_price))
        // Category routes
        .route(
            "/api/v1/categories",
            get(menu::list_categories).post(category::register_category),
        )
        .route(
            "/api/v1/categories/{category_code}",
            get(category::get_category),
        )
        // Whole catalog, fetch strategy selectable
        .route("/api/v1/catalog", get(category::browse_catalog))
        // Add State
        .with_state(state)
        // Add CORS
        .layer(
            CorsLayer::new()
                .allow_origin("http://localhost:5173".parse::<axum::http::HeaderValue>().unwrap())
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        );

    // Bind address
    let host: std::net::IpAddr = config
        .app
        .host
        .parse()
        .map_err(|_| AppError::InvalidBindAddress(config.app.host.clone()))?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
