use crate::types::profile::{PageSignals, PerformanceSignals};
use crate::types::scoring::CategoryScore;

pub const PERFORMANCE_POINTS: f64 = 30.0;
pub const H1_POINTS: f64 = 8.0;
pub const META_POINTS: f64 = 8.0;
pub const TITLE_POINTS: f64 = 7.0;
pub const SCHEMA_POINTS: f64 = 7.0;
pub const VIEWPORT_POINTS: f64 = 5.0;
pub const WORD_COUNT_POINTS: f64 = 10.0;
pub const INTERNAL_LINK_POINTS: f64 = 5.0;
pub const ALT_TEXT_POINTS: f64 = 5.0;
pub const SEO_AUDIT_POINTS: f64 = 15.0;

pub const NEUTRAL_SCORE: f64 = 50.0;
pub const UNABLE_TO_ANALYZE: &str = "Unable to analyze website performance";

/// Analyzer scores at or above this are reported as healthy.
const GOOD_AUDIT_SCORE: f64 = 0.9;

pub fn calculate_onsite_score(
    performance: Option<&PerformanceSignals>,
    page: Option<&PageSignals>,
) -> CategoryScore {
    if performance.is_none() && page.is_none() {
        return CategoryScore::from_points(NEUTRAL_SCORE, vec![UNABLE_TO_ANALYZE.to_string()]);
    }

    let mut points = 0.0;
    let mut insights = Vec::new();

    let performance_score = performance.and_then(|signals| usable(signals.performance_score));
    let seo_score = performance.and_then(|signals| usable(signals.seo_score));
    let has_viewport = performance.is_some_and(|signals| signals.has_mobile_viewport);
    let page = page.cloned().unwrap_or_default();

    match performance_score {
        Some(score) => {
            points += score * PERFORMANCE_POINTS;
            if score < GOOD_AUDIT_SCORE {
                insights.push(format!(
                    "Page performance score is {:.0}/100 (aim for 90+)",
                    score * 100.0
                ));
            }
        }
        None => insights.push("Page performance could not be measured".to_string()),
    }

    if page.has_h1 {
        points += H1_POINTS;
    } else {
        insights.push("Homepage is missing an H1 heading".to_string());
    }

    if page.has_meta_description {
        points += META_POINTS;
    } else {
        insights.push("Homepage is missing a meta description".to_string());
    }

    if page.has_title {
        points += TITLE_POINTS;
    } else {
        insights.push("Homepage is missing a title tag".to_string());
    }

    if page.has_local_business_schema {
        points += SCHEMA_POINTS;
    } else {
        insights.push("No structured data markup found".to_string());
    }

    if has_viewport {
        points += VIEWPORT_POINTS;
    } else {
        insights.push("Missing mobile viewport meta tag".to_string());
    }

    let words = page.word_count.max(0);
    points += word_count_points(words);
    if words < 500 {
        insights.push(format!(
            "Homepage has only {words} words of content (aim for 500+)"
        ));
    }

    let links = page.internal_link_count.max(0);
    points += internal_link_points(links);
    if links < 10 {
        insights.push(format!("Only {links} internal links (aim for 10+)"));
    }

    let coverage = page.alt_text_coverage.max(0.0);
    points += alt_text_points(coverage);
    if coverage < 80.0 {
        insights.push(format!(
            "Only {coverage:.0}% of images have alt text (aim for 80%+)"
        ));
    }

    match seo_score {
        Some(score) => {
            points += score * SEO_AUDIT_POINTS;
            if score < GOOD_AUDIT_SCORE {
                insights.push(format!(
                    "SEO audit score is {:.0}/100 (aim for 90+)",
                    score * 100.0
                ));
            }
        }
        None => insights.push("SEO audit data unavailable".to_string()),
    }

    CategoryScore::from_points(points, insights)
}

fn usable(score: Option<f64>) -> Option<f64> {
    score
        .filter(|score| !score.is_nan())
        .map(|score| score.clamp(0.0, 1.0))
}

fn word_count_points(words: i64) -> f64 {
    match words {
        500.. => WORD_COUNT_POINTS,
        250..=499 => 6.0,
        _ => 2.0,
    }
}

fn internal_link_points(links: i64) -> f64 {
    match links {
        10.. => INTERNAL_LINK_POINTS,
        5..=9 => 3.0,
        _ => 0.0,
    }
}

fn alt_text_points(coverage: f64) -> f64 {
    if coverage >= 80.0 {
        ALT_TEXT_POINTS
    } else if coverage >= 50.0 {
        3.0
    } else {
        0.0
    }
}
