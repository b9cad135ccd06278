use crate::{
    carousel::carousel, contact::contact, handle_404, health::health_check, home::home,
    newsletter::newsletter_signup, prayer_times::prayer_times,
};
use axum::{Router, routing::post};
use axum_extra::routing::{RouterExt, TypedPath};
use state::AppState;
use std::path::PathBuf;
use telemetry::RequestIdMakeSpan;
use tower::ServiceBuilder;
use tower_http::{
    ServiceBuilderExt, cors::CorsLayer, request_id::MakeRequestUuid, services::ServeDir,
    trace::TraceLayer,
};

pub fn get_router(app_state: AppState, cors_permissive: bool) -> Router {
    let request_id_middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(TraceLayer::new_for_http().make_span_with(RequestIdMakeSpan))
        .propagate_x_request_id();

    let static_dir = PathBuf::from(concat!(env!("CARGO_WORKSPACE_DIR"), "/static"));

    let router = Router::new()
        .typed_get(home)
        .typed_get(health_check)
        .typed_get(prayer_times)
        .typed_get(carousel)
        .route(routes_path::Newsletter::PATH, post(newsletter_signup))
        .route(routes_path::Subscribe::PATH, post(newsletter_signup))
        .typed_post(contact)
        .nest_service(routes_path::STATIC, ServeDir::new(static_dir))
        .fallback(handle_404)
        .layer(request_id_middleware)
        .with_state(app_state);

    if cors_permissive {
        router.layer(CorsLayer::very_permissive())
    } else {
        router
    }
}

pub mod routes_path {
    use axum_extra::routing::TypedPath;
    use serde::Deserialize;

    pub const STATIC: &str = "/static";

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/")]
    pub struct Index;

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/health")]
    pub struct HealthCheck;

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/api/prayer-times")]
    pub struct PrayerTimes;

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/api/carousel")]
    pub struct Carousel;

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/api/newsletter")]
    pub struct Newsletter;

    /// Older pages post signups here.
    #[derive(TypedPath, Deserialize)]
    #[typed_path("/api/subscribe")]
    pub struct Subscribe;

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/api/contact")]
    pub struct Contact;
}
