use axum::{
    http::HeaderMap,
    response::Redirect,
    routing::get,
    Router,
};
use serde_json::json;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use wolf_api_rust::config;
use wolf_api_rust::database::manager::DatabaseManager;
use wolf_api_rust::middleware::{authenticate, jwt_auth_middleware};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, SECRET_KEY, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Wolf API in {:?} mode", config.environment);

    // Apply schema migrations; a missing database keeps the server up with
    // /health reporting degraded
    if let Err(e) = DatabaseManager::migrate().await {
        tracing::warn!("Skipping migrations: {}", e);
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("WOLF_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("Wolf API server listening on http://{}", bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes
        .merge(auth_public_routes())
        // Protected resources and console
        .merge(api_routes())
        .merge(admin_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn auth_public_routes() -> Router {
    use axum::routing::post;
    use wolf_api_rust::handlers::auth;

    Router::new()
        .route("/auth/login", get(auth::login_form).post(auth::login))
        .route("/auth/register", post(auth::register))
}

fn api_routes() -> Router {
    use axum::routing::delete;
    use wolf_api_rust::handlers::{
        auth, game_hole_data, game_players, games, player_hole_scores, saved_game_meta,
    };

    Router::new()
        // Session introspection for authenticated users
        .route("/api/auth/whoami", get(auth::whoami))
        .route("/api/auth/session", delete(auth::logout))
        // Five parallel resources, collection then record level
        .route("/api/games", get(games::list).post(games::create))
        .route(
            "/api/games/:id",
            get(games::get_by_id).put(games::update).delete(games::delete),
        )
        .route(
            "/api/game-players",
            get(game_players::list).post(game_players::create),
        )
        .route(
            "/api/game-players/:id",
            get(game_players::get_by_id)
                .put(game_players::update)
                .delete(game_players::delete),
        )
        .route(
            "/api/game-hole-data",
            get(game_hole_data::list).post(game_hole_data::create),
        )
        .route(
            "/api/game-hole-data/:id",
            get(game_hole_data::get_by_id)
                .put(game_hole_data::update)
                .delete(game_hole_data::delete),
        )
        .route(
            "/api/player-hole-scores",
            get(player_hole_scores::list).post(player_hole_scores::create),
        )
        .route(
            "/api/player-hole-scores/:id",
            get(player_hole_scores::get_by_id)
                .put(player_hole_scores::update)
                .delete(player_hole_scores::delete),
        )
        .route(
            "/api/saved-game-meta",
            get(saved_game_meta::list).post(saved_game_meta::create),
        )
        .route(
            "/api/saved-game-meta/:id",
            get(saved_game_meta::get_by_id)
                .put(saved_game_meta::update)
                .delete(saved_game_meta::delete),
        )
        .layer(axum::middleware::from_fn(jwt_auth_middleware))
}

fn admin_routes() -> Router {
    use axum::routing::put;
    use wolf_api_rust::handlers::admin;

    Router::new()
        .route("/admin", get(admin::index))
        .route("/admin/:table", get(admin::list_table))
        .route(
            "/admin/:table/:id",
            put(admin::update_row).delete(admin::delete_row),
        )
        .layer(axum::middleware::from_fn(jwt_auth_middleware))
}

/// Authenticated visitors land on the console, everyone else on login
async fn root(headers: HeaderMap) -> Redirect {
    if authenticate(&headers).is_ok() {
        Redirect::to("/admin")
    } else {
        Redirect::to("/auth/login")
    }
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
