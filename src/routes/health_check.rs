use actix_web::{HttpResponse, get};

/// Liveness probe for the console's load balancer.
#[get("/health_check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
