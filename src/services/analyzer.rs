// src/services/analyzer.rs
// DOCUMENTATION: Hotel lookup pipeline
// PURPOSE: Resolve -> project reviews -> render word cloud, one linear pass

use crate::errors::AnalyzerError;
use crate::models::{AnalysisOutcome, PlaceQuery};
use crate::services::{join_review_text, project_reviews, PlaceResolver, WordCloudRenderer};
use std::sync::Arc;

pub struct HotelAnalyzer {
    resolver: PlaceResolver,
    renderer: Arc<dyn WordCloudRenderer>,
}

impl HotelAnalyzer {
    pub fn new(resolver: PlaceResolver, renderer: Arc<dyn WordCloudRenderer>) -> Self {
        Self { resolver, renderer }
    }

    /// Run the full lookup for one query
    /// DOCUMENTATION: Not found and no reviews are outcomes, not errors.
    /// The renderer is only called when there is at least one review.
    pub async fn analyze(&self, query: &PlaceQuery) -> Result<AnalysisOutcome, AnalyzerError> {
        let place = match self.resolver.resolve(query).await? {
            Some(place) => place,
            None => return Ok(AnalysisOutcome::not_found(query.name.clone())),
        };

        let reviews = project_reviews(place.reviews.as_deref())?;
        if reviews.is_empty() {
            log::info!("{} has no reviews", place.name);
            return Ok(AnalysisOutcome::no_reviews(place));
        }

        let wordcloud = self.renderer.render(&join_review_text(&reviews))?;
        log::info!("Analyzed {} ({} reviews)", place.name, reviews.len());

        Ok(AnalysisOutcome::Found {
            place,
            reviews,
            wordcloud,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoogleReview, ReviewRecord};
    use crate::services::test_support::{RecordingRenderer, StubProvider};

    fn analyzer(provider: StubProvider) -> (HotelAnalyzer, Arc<RecordingRenderer>) {
        let renderer = Arc::new(RecordingRenderer::default());
        let resolver = PlaceResolver::new(Arc::new(provider), "India");
        (HotelAnalyzer::new(resolver, renderer.clone()), renderer)
    }

    fn text_review(text: &str) -> GoogleReview {
        GoogleReview {
            author_name: Some("Guest".to_string()),
            rating: Some(serde_json::Number::from(4)),
            text: Some(text.to_string()),
            relative_time_description: Some("a month ago".to_string()),
            ..GoogleReview::default()
        }
    }

    #[tokio::test]
    async fn test_taj_mahal_scenario() {
        let (analyzer, renderer) = analyzer(StubProvider::taj());

        let outcome = analyzer
            .analyze(&PlaceQuery::new("Taj Mahal Palace Mumbai"))
            .await
            .unwrap();

        match outcome {
            AnalysisOutcome::Found { place, reviews, .. } => {
                assert_eq!(place.place_id, "p1");
                assert_eq!(place.name, "Taj Mahal Palace");
                assert_eq!(place.rating, Some(4.7));
                assert_eq!(
                    reviews,
                    vec![ReviewRecord {
                        author: "A".to_string(),
                        rating: serde_json::Number::from(5),
                        text: "Excellent".to_string(),
                        time: "a week ago".to_string(),
                    }]
                );
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(*renderer.texts.lock().unwrap(), vec!["Excellent".to_string()]);
    }

    #[tokio::test]
    async fn test_renderer_gets_joined_text() {
        let mut provider = StubProvider::taj();
        if let Some(details) = provider.details.get_mut("p1") {
            details.reviews = Some(vec![text_review("Great stay"), text_review("Great service")]);
        }
        let (analyzer, renderer) = analyzer(provider);

        analyzer.analyze(&PlaceQuery::new("Taj")).await.unwrap();

        assert_eq!(
            *renderer.texts.lock().unwrap(),
            vec!["Great stay Great service".to_string()]
        );
    }

    #[tokio::test]
    async fn test_no_reviews_skips_renderer() {
        let mut provider = StubProvider::taj();
        if let Some(details) = provider.details.get_mut("p1") {
            details.reviews = None;
        }
        let (analyzer, renderer) = analyzer(provider);

        let outcome = analyzer.analyze(&PlaceQuery::new("Taj")).await.unwrap();

        assert_eq!(outcome.status(), "no_reviews");
        assert!(renderer.texts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_not_found_outcome() {
        let (analyzer, renderer) = analyzer(StubProvider::default());

        let outcome = analyzer.analyze(&PlaceQuery::new("Nowhere Inn")).await.unwrap();

        assert_eq!(outcome, AnalysisOutcome::not_found("Nowhere Inn"));
        assert!(renderer.texts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_review_propagates() {
        let mut provider = StubProvider::taj();
        if let Some(details) = provider.details.get_mut("p1") {
            details.reviews = Some(vec![GoogleReview::default()]);
        }
        let (analyzer, _) = analyzer(provider);

        let err = analyzer.analyze(&PlaceQuery::new("Taj")).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::MalformedResponse(_)));
    }
}
