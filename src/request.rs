use crate::error::{AuditError, Result};
use crate::types::profile::{
    AuditRequest, BusinessProfile, GbpSignals, PageSignals, PerformanceSignals, SignalBundle,
};
use std::path::{Path, PathBuf};
use tracing::info;

pub const TEMPLATE_FILE: &str = "audit.json";

pub fn load_request(path: &Path) -> Result<AuditRequest> {
    if !path.exists() {
        return Err(AuditError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AuditError::InputParse(format!("{}: {}", path.display(), e)))
}

/// Writes a filled-in example request to `dir/audit.json`.
pub fn write_template(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(TEMPLATE_FILE);
    if path.exists() && !force {
        return Err(AuditError::AlreadyExists(path.display().to_string()));
    }
    std::fs::create_dir_all(dir)?;
    let rendered = serde_json::to_string_pretty(&template_request())?;
    std::fs::write(&path, format!("{rendered}\n"))?;
    info!(path = %path.display(), "wrote audit request template");
    Ok(path)
}

fn template_request() -> AuditRequest {
    AuditRequest {
        profile: BusinessProfile {
            name: "Acme Plumbing".to_string(),
            website: "https://acmeplumbing.example".to_string(),
            street_address: "100 Main St".to_string(),
            city: "Austin".to_string(),
            zip: "78701".to_string(),
            phone: "(512) 555-0100".to_string(),
            category: "plumber".to_string(),
            gbp_url: Some("https://maps.google.com/?cid=0".to_string()),
            email: Some("owner@acmeplumbing.example".to_string()),
        },
        signals: SignalBundle {
            gbp: Some(GbpSignals {
                found: true,
                rating: Some(4.6),
                review_count: 32,
                has_recent_activity: false,
            }),
            page: Some(PageSignals {
                has_h1: true,
                has_title: true,
                has_meta_description: false,
                has_local_business_schema: false,
                alt_text_coverage: 40.0,
                internal_link_count: 8,
                word_count: 420,
                mentions_city: true,
                mentions_category: true,
            }),
            performance: Some(PerformanceSignals {
                performance_score: Some(0.72),
                seo_score: Some(0.85),
                has_mobile_viewport: true,
            }),
            citation_count: 6,
        },
    }
}
