pub mod local;
pub mod onsite;
pub mod phone;
#[cfg(test)]
mod properties;

use crate::types::config::LocalScoreConfig;
use crate::types::profile::{AuditRequest, BusinessProfile, SignalBundle};
use crate::types::report::AuditReport;
use crate::types::scoring::ScoreResult;
use local::{calculate_local_score, LocalSignals};
use onsite::calculate_onsite_score;
use tracing::{debug, warn};

/// Scores a profile against its collected signals. Pure; the two sub-scores
/// are computed independently.
pub fn compute_score(profile: &BusinessProfile, bundle: &SignalBundle) -> ScoreResult {
    let bundle = bundle.normalized();
    let local = calculate_local_score(&LocalSignals::collect(profile, &bundle));
    let onsite = calculate_onsite_score(bundle.performance.as_ref(), bundle.page.as_ref());
    ScoreResult::new(local, onsite)
}

pub fn analyze(request: &AuditRequest, config: &LocalScoreConfig) -> AuditReport {
    let empty = SignalBundle::default();
    let bundle = if config.api_enabled() {
        &request.signals
    } else {
        warn!("live signal collection is disabled; scoring the profile without signals");
        &empty
    };

    debug!(
        business = %request.profile.name,
        has_gbp = bundle.gbp.is_some(),
        has_page = bundle.page.is_some(),
        has_performance = bundle.performance.is_some(),
        "scoring audit request"
    );
    let result = compute_score(&request.profile, bundle);
    debug!(
        local = result.local.score,
        onsite = result.onsite.score,
        combined = result.combined,
        "audit scored"
    );

    AuditReport::new(&request.profile, result)
}
