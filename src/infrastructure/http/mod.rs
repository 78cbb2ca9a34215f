pub mod request_id;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{food::FoodController, health, recipe::RecipeController};
use crate::domain::{food::FoodService, recipe::RecipeService};
use crate::infrastructure::config::Config;
use crate::infrastructure::fatsecret::{FatSecretApi, FatSecretClient, TokenManager};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Wire the token manager, FatSecret client, services and controllers into a router
pub fn build_app(config: &Config) -> Result<Router, reqwest::Error> {
    let http_client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    let tokens = Arc::new(TokenManager::new(
        http_client.clone(),
        config.oauth_url.clone(),
        config.client_id.clone(),
        config.client_secret.clone(),
        config.scope.clone(),
        config.token_safety_margin(),
    ));
    let api: Arc<dyn FatSecretApi> = Arc::new(FatSecretClient::new(
        http_client,
        config.api_url.clone(),
        tokens.clone(),
    ));

    let food_controller = Arc::new(FoodController::new(Arc::new(FoodService::new(api.clone()))));
    let recipe_controller = Arc::new(RecipeController::new(Arc::new(RecipeService::new(api))));

    Ok(create_router(tokens, food_controller, recipe_controller))
}

pub fn create_router(
    tokens: Arc<TokenManager>,
    food_controller: Arc<FoodController>,
    recipe_controller: Arc<RecipeController>,
) -> Router {
    let food_routes = Router::new()
        .route("/api/foods/search", get(FoodController::search))
        .route("/api/foods/autocomplete", get(FoodController::autocomplete))
        .route("/api/foods/barcode", get(FoodController::barcode))
        .route("/api/foods/details", get(FoodController::details))
        .route("/api/foods/brands", get(FoodController::brands))
        .route("/api/foods/categories", get(FoodController::categories))
        .route("/api/foods/sub-categories", get(FoodController::sub_categories))
        .route(
            "/api/foods/natural-language",
            post(FoodController::natural_language),
        )
        .route(
            "/api/foods/image-recognition",
            post(FoodController::image_recognition),
        )
        .with_state(food_controller);

    let recipe_routes = Router::new()
        .route("/api/recipes/details", get(RecipeController::details))
        .route("/api/recipes/search", get(RecipeController::search))
        .route("/api/recipes/types", get(RecipeController::types))
        .with_state(recipe_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(tokens)
        .merge(food_routes)
        .merge(recipe_routes)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(config: &Config, app: Router) -> Result<(), std::io::Error> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await
}
