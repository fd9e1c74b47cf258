use crate::types::profile::BusinessProfile;
use crate::types::scoring::{ScoreBand, ScoreResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub business: String,
    pub website: String,
    pub city: String,
    pub category: String,
    pub generated_at: DateTime<Utc>,
    pub band: ScoreBand,
    pub result: ScoreResult,
}

impl AuditReport {
    pub fn new(profile: &BusinessProfile, result: ScoreResult) -> Self {
        Self {
            business: profile.name.clone(),
            website: profile.website.clone(),
            city: profile.city.clone(),
            category: profile.category.clone(),
            generated_at: Utc::now(),
            band: ScoreBand::from_score(result.combined),
            result,
        }
    }
}
