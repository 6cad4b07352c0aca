// src/handlers/admin.rs
// DOCUMENTATION: Admin handlers for the session cache
// PURPOSE: Inspect and reset memoized hotel lookups

use crate::config::Config;
use crate::errors::AnalyzerError;
use crate::services::PlaceCache;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;

/// GET /admin/cache
/// Entry count plus hit/miss counters
///
/// Requires admin authentication via X-Admin-Token header
pub async fn cache_stats(
    cache: web::Data<Arc<PlaceCache>>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, AnalyzerError> {
    verify_admin_token(&req, &config)?;

    Ok(HttpResponse::Ok().json(cache.stats().await))
}

/// DELETE /admin/cache
/// Forget every memoized lookup
pub async fn clear_cache(
    cache: web::Data<Arc<PlaceCache>>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, AnalyzerError> {
    verify_admin_token(&req, &config)?;

    let cleared = cache.clear().await;
    log::info!("Admin cleared {} cached lookups", cleared);

    Ok(HttpResponse::Ok().json(json!({ "cleared": cleared })))
}

fn verify_admin_token(req: &HttpRequest, config: &Config) -> Result<(), AnalyzerError> {
    let token = req
        .headers()
        .get("X-Admin-Token")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("Admin request without token");
            AnalyzerError::Unauthorized
        })?;

    if token != config.admin_token {
        log::warn!("Admin request with invalid token");
        return Err(AnalyzerError::Forbidden);
    }

    Ok(())
}

/// Configuration for admin routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/cache", web::get().to(cache_stats))
            .route("/cache", web::delete().to(clear_cache)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use crate::services::CacheKey;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_rt::test]
    async fn test_cache_endpoints_require_token() {
        let cache = Arc::new(PlaceCache::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(cache.clone()))
                .app_data(web::Data::new(test_config()))
                .configure(config),
        )
        .await;

        let missing = test::TestRequest::get().uri("/admin/cache").to_request();
        assert_eq!(
            test::call_service(&app, missing).await.status(),
            StatusCode::UNAUTHORIZED
        );

        let wrong = test::TestRequest::get()
            .uri("/admin/cache")
            .insert_header(("X-Admin-Token", "nope"))
            .to_request();
        assert_eq!(
            test::call_service(&app, wrong).await.status(),
            StatusCode::FORBIDDEN
        );
    }

    #[actix_rt::test]
    async fn test_stats_and_clear() {
        let cache = Arc::new(PlaceCache::new());
        cache.set(CacheKey::new("Nowhere Inn", "India"), None).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(cache.clone()))
                .app_data(web::Data::new(test_config()))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/cache")
            .insert_header(("X-Admin-Token", "secret"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["entries"], 1);

        let req = test::TestRequest::delete()
            .uri("/admin/cache")
            .insert_header(("X-Admin-Token", "secret"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["cleared"], 1);
        assert_eq!(cache.stats().await.entries, 0);
    }
}
