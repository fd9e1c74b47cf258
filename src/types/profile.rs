use serde::{Deserialize, Serialize};

/// Business details collected from the audit form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub website: String,
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub gbp_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl BusinessProfile {
    pub fn has_gbp_url(&self) -> bool {
        self.gbp_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    pub fn nap_complete(&self) -> bool {
        [&self.name, &self.phone, &self.zip]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Google Business Profile metrics as returned by the review provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GbpSignals {
    #[serde(default)]
    pub found: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: i64,
    #[serde(default)]
    pub has_recent_activity: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSignals {
    #[serde(default)]
    pub has_h1: bool,
    #[serde(default)]
    pub has_title: bool,
    #[serde(default)]
    pub has_meta_description: bool,
    #[serde(default)]
    pub has_local_business_schema: bool,
    /// Percentage of images carrying alt text, 0-100.
    #[serde(default)]
    pub alt_text_coverage: f64,
    #[serde(default)]
    pub internal_link_count: i64,
    #[serde(default)]
    pub word_count: i64,
    #[serde(default)]
    pub mentions_city: bool,
    #[serde(default)]
    pub mentions_category: bool,
}

/// Output of the external page-performance analyzer. Scores are 0-1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSignals {
    #[serde(default)]
    pub performance_score: Option<f64>,
    #[serde(default)]
    pub seo_score: Option<f64>,
    #[serde(default)]
    pub has_mobile_viewport: bool,
}

/// Everything gathered upstream before scoring. Any source may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalBundle {
    #[serde(default)]
    pub gbp: Option<GbpSignals>,
    #[serde(default)]
    pub page: Option<PageSignals>,
    #[serde(default)]
    pub performance: Option<PerformanceSignals>,
    #[serde(default)]
    pub citation_count: i64,
}

impl SignalBundle {
    /// Clamps out-of-range values into their documented ranges. NaN becomes absent.
    pub fn normalized(&self) -> SignalBundle {
        SignalBundle {
            gbp: self.gbp.as_ref().map(|gbp| GbpSignals {
                found: gbp.found,
                rating: clamp_optional(gbp.rating, 0.0, 5.0),
                review_count: gbp.review_count.max(0),
                has_recent_activity: gbp.has_recent_activity,
            }),
            page: self.page.as_ref().map(|page| PageSignals {
                alt_text_coverage: clamp_or_zero(page.alt_text_coverage, 0.0, 100.0),
                internal_link_count: page.internal_link_count.max(0),
                word_count: page.word_count.max(0),
                ..page.clone()
            }),
            performance: self
                .performance
                .as_ref()
                .map(|performance| PerformanceSignals {
                    performance_score: clamp_optional(performance.performance_score, 0.0, 1.0),
                    seo_score: clamp_optional(performance.seo_score, 0.0, 1.0),
                    has_mobile_viewport: performance.has_mobile_viewport,
                }),
            citation_count: self.citation_count.max(0),
        }
    }
}

fn clamp_optional(value: Option<f64>, min: f64, max: f64) -> Option<f64> {
    value
        .filter(|value| !value.is_nan())
        .map(|value| value.clamp(min, max))
}

fn clamp_or_zero(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// On-disk audit request: the profile plus whatever signals were collected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditRequest {
    pub profile: BusinessProfile,
    #[serde(default)]
    pub signals: SignalBundle,
}
