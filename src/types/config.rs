use crate::error::AuditError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalScoreConfig {
    pub service: Option<ServiceConfig>,
    pub report: Option<ReportConfig>,
    pub thresholds: Option<ThresholdsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// When false the calling layer skips live provider calls and scores without signals.
    #[serde(default = "default_api_enabled")]
    pub api_enabled: bool,
}

fn default_api_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub brand_name: Option<String>,
    pub cta_url: Option<String>,
    pub cta_label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    pub pass_score: Option<u32>,
}

/// Report branding with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub brand_name: String,
    pub cta_url: Option<String>,
    pub cta_label: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            brand_name: "Local SEO Audit".to_string(),
            cta_url: None,
            cta_label: "Book a free strategy call".to_string(),
        }
    }
}

impl LocalScoreConfig {
    pub const DEFAULT_PASS_SCORE: u8 = 70;

    pub fn api_enabled(&self) -> bool {
        self.service
            .as_ref()
            .map(|service| service.api_enabled)
            .unwrap_or_else(default_api_enabled)
    }

    pub fn pass_score(&self) -> u8 {
        self.thresholds
            .as_ref()
            .and_then(|thresholds| thresholds.pass_score)
            .and_then(|score| u8::try_from(score).ok())
            .map(|score| score.min(100))
            .unwrap_or(Self::DEFAULT_PASS_SCORE)
    }

    pub fn branding(&self) -> Branding {
        let defaults = Branding::default();
        match &self.report {
            Some(report) => Branding {
                brand_name: report
                    .brand_name
                    .clone()
                    .unwrap_or(defaults.brand_name),
                cta_url: report.cta_url.clone(),
                cta_label: report.cta_label.clone().unwrap_or(defaults.cta_label),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), AuditError> {
        if let Some(pass_score) = self
            .thresholds
            .as_ref()
            .and_then(|thresholds| thresholds.pass_score)
        {
            if pass_score > 100 {
                return Err(AuditError::ConfigParse(format!(
                    "thresholds.pass_score must be between 0 and 100 (found {pass_score})"
                )));
            }
        }

        if let Some(report) = &self.report {
            if let Some(brand_name) = &report.brand_name {
                if brand_name.trim().is_empty() {
                    return Err(AuditError::ConfigParse(
                        "report.brand_name must be non-empty".to_string(),
                    ));
                }
            }
            if let Some(cta_url) = &report.cta_url {
                if !(cta_url.starts_with("https://") || cta_url.starts_with("http://")) {
                    return Err(AuditError::ConfigParse(format!(
                        "report.cta_url must be an http(s) URL: {cta_url}"
                    )));
                }
            }
        }

        Ok(())
    }
}
