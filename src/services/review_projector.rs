// src/services/review_projector.rs
// DOCUMENTATION: Provider reviews -> display rows
// PURPOSE: Direct field rename, order and count preserved

use crate::errors::AnalyzerError;
use crate::models::{GoogleReview, ReviewRecord};

/// Project raw reviews into rows
/// DOCUMENTATION: No filtering, deduplication or sorting.
/// A missing list is the same as an empty one.
/// An entry without author, rating, text or relative time is a malformed response.
pub fn project_reviews(raw: Option<&[GoogleReview]>) -> Result<Vec<ReviewRecord>, AnalyzerError> {
    raw.unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, review)| project_review(index, review))
        .collect()
}

fn project_review(index: usize, review: &GoogleReview) -> Result<ReviewRecord, AnalyzerError> {
    Ok(ReviewRecord {
        author: required(index, "author_name", review.author_name.as_ref())?.clone(),
        rating: required(index, "rating", review.rating.as_ref())?.clone(),
        text: required(index, "text", review.text.as_ref())?.clone(),
        time: required(
            index,
            "relative_time_description",
            review.relative_time_description.as_ref(),
        )?
        .clone(),
    })
}

fn required<'a, T>(index: usize, field: &str, value: Option<&'a T>) -> Result<&'a T, AnalyzerError> {
    value.ok_or_else(|| {
        log::error!("Review {} is missing {}", index, field);
        AnalyzerError::MalformedResponse(format!("review {} is missing {}", index, field))
    })
}
