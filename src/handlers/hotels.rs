// src/handlers/hotels.rs
// DOCUMENTATION: HTTP handlers for hotel lookups
// PURPOSE: Serve the search page, run the analyzer, return JSON or the word cloud

use crate::config::Config;
use crate::errors::AnalyzerError;
use crate::models::{AnalysisOutcome, PlaceQuery, NO_REVIEWS_MESSAGE};
use crate::services::HotelAnalyzer;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

const INDEX_TEMPLATE: &str = include_str!("index.html");

fn html_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn validated(query: PlaceQuery) -> Result<PlaceQuery, AnalyzerError> {
    let query = query.normalized();
    if let Err(e) = query.validate() {
        return Err(AnalyzerError::ValidationError(e.to_string()));
    }
    Ok(query)
}

/// GET /
/// Single search page, pre-filled with the default hotel
pub async fn index(config: web::Data<Config>) -> impl Responder {
    let page = INDEX_TEMPLATE.replace(
        "{{DEFAULT_HOTEL_NAME}}",
        &html_escape(&config.default_hotel_name),
    );

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

/// GET /hotels/analyze?name=...&location=...
/// Basic info, review rows and word cloud for the best-matching hotel
pub async fn analyze_hotel(
    analyzer: web::Data<HotelAnalyzer>,
    query: web::Query<PlaceQuery>,
) -> Result<HttpResponse, AnalyzerError> {
    let query = validated(query.into_inner())?;
    log::info!("Analyze requested for {:?}", query.name);

    let outcome = analyzer.analyze(&query).await?;
    log::info!("Analysis for {:?}: {}", query.name, outcome.status());

    Ok(match outcome {
        AnalysisOutcome::NotFound { .. } => HttpResponse::NotFound().json(outcome),
        _ => HttpResponse::Ok().json(outcome),
    })
}

/// GET /hotels/wordcloud.png?name=...&location=...
/// The rendered word cloud on its own
pub async fn hotel_wordcloud(
    analyzer: web::Data<HotelAnalyzer>,
    query: web::Query<PlaceQuery>,
) -> Result<HttpResponse, AnalyzerError> {
    let query = validated(query.into_inner())?;

    match analyzer.analyze(&query).await? {
        AnalysisOutcome::Found { wordcloud, .. } => Ok(HttpResponse::Ok()
            .content_type("image/png")
            .body(wordcloud.png)),
        AnalysisOutcome::NoReviews { .. } => {
            Err(AnalyzerError::NotFound(NO_REVIEWS_MESSAGE.to_string()))
        }
        AnalysisOutcome::NotFound { message, .. } => Err(AnalyzerError::NotFound(message)),
    }
}

/// Configuration for hotel routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index)).service(
        web::scope("/hotels")
            .route("/analyze", web::get().to(analyze_hotel))
            .route("/wordcloud.png", web::get().to(hotel_wordcloud)),
    );
}
