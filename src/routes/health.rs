use std::time::Instant;

use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Instant the server came up, shared as app data so `/api/health` can
/// report uptime.
pub struct ServerStart(Instant);

impl ServerStart {
    pub fn now() -> Self {
        Self(Instant::now())
    }

    pub fn uptime_secs(&self) -> u64 {
        self.0.elapsed().as_secs()
    }
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "message": "BeatCrest API server is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[get("/api/test")]
async fn api_test() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "API connection successful",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[get("/api/health")]
async fn health(start: web::Data<ServerStart>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime": start.uptime_secs(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Catch-all for unknown routes, wired in as the app's default service.
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(json!({
        "status": "error",
        "message": "Route not found",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
    cfg.service(api_test);
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn index_reports_the_server_is_running() {
        let app = test::init_service(App::new().configure(init)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert!(body["message"].as_str().unwrap().contains("BeatCrest"));
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn api_test_answers_with_a_success_payload() {
        let app = test::init_service(App::new().configure(init)).await;
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/test").to_request()).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "API connection successful");
    }

    #[actix_web::test]
    async fn health_reports_version_and_uptime() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ServerStart::now()))
                .configure(init),
        )
        .await;
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/health").to_request(),
        )
        .await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["uptime"].is_u64());
    }

    #[actix_web::test]
    async fn unknown_routes_get_a_json_404() {
        let app = test::init_service(
            App::new()
                .configure(init)
                .default_service(web::to(not_found)),
        )
        .await;
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/nope").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 404);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Route not found");
    }
}
