use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{achievement, auth, booking, geo, health, payment},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::liveness))
        // Password-flow auth (paths kept as the SPA expects them)
        .route("/signUp", post(auth::sign_up))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/verifyOtp", post(auth::verify_otp))
        .route("/resendOtp", post(auth::resend_otp))
        .route("/forgotPassword", post(auth::forgot_password))
        .route("/updatePassword", post(auth::update_password))
        // Webhook-driven identity creation
        .route("/api/auth/signup", post(auth::webhook_sign_up))
        // Bookings
        .route(
            "/api/bookings",
            post(booking::create_booking).get(booking::list_bookings),
        )
        .route("/api/bookings/{booking_id}", get(booking::get_booking))
        .route(
            "/api/bookings/{booking_id}/payment",
            post(booking::settle_payment),
        )
        .route(
            "/api/bookings/{booking_id}/cancel",
            post(booking::cancel_booking),
        )
        // Achievements
        .route("/api/achievements", get(achievement::get_achievements))
        // Geocoding
        .route("/api/geocode/reverse", get(geo::reverse_geocode))
        // Payment provider
        .route("/api/payments/webhooks", get(payment::list_webhooks))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::health::liveness,
        crate::server::controller::auth::sign_up,
        crate::server::controller::auth::webhook_sign_up,
        crate::server::controller::auth::login,
        crate::server::controller::auth::logout,
        crate::server::controller::auth::verify_otp,
        crate::server::controller::auth::resend_otp,
        crate::server::controller::auth::forgot_password,
        crate::server::controller::auth::update_password,
        crate::server::controller::booking::create_booking,
        crate::server::controller::booking::list_bookings,
        crate::server::controller::booking::get_booking,
        crate::server::controller::booking::settle_payment,
        crate::server::controller::booking::cancel_booking,
        crate::server::controller::achievement::get_achievements,
        crate::server::controller::geo::reverse_geocode,
        crate::server::controller::payment::list_webhooks,
    ),
    info(
        title = "Trailhead API",
        description = "Adventure booking backend: auth, bookings, achievements"
    )
)]
struct ApiDoc;

/// Swagger UI with the generated OpenAPI document.
pub fn swagger() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
