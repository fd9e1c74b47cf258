use super::phone::is_valid_us_phone;
use crate::types::profile::{BusinessProfile, GbpSignals, SignalBundle};
use crate::types::scoring::CategoryScore;

pub const GBP_BASE_POINTS: f64 = 5.0;
pub const GBP_REVIEW_POINTS: f64 = 15.0;
pub const GBP_RATING_POINTS: f64 = 10.0;
pub const GBP_ACTIVITY_POINTS: f64 = 5.0;
pub const NAP_POINTS: f64 = 10.0;
pub const PHONE_POINTS: f64 = 8.0;
pub const SCHEMA_POINTS: f64 = 15.0;
pub const CITY_POINTS: f64 = 10.0;
pub const CATEGORY_POINTS: f64 = 8.0;
pub const INTERNAL_LINK_POINTS: f64 = 7.0;
pub const ALT_TEXT_POINTS: f64 = 5.0;
// Citations are de-emphasized in favour of the GBP listing.
pub const CITATION_POINTS: f64 = 2.0;

pub const GBP_URL_MISSING: &str = "Google Business Profile URL not provided";
pub const GBP_FETCH_FAILED: &str = "Could not fetch Google Business Profile data";

const MIN_INTERNAL_LINKS: i64 = 5;
const MIN_ALT_COVERAGE: f64 = 50.0;
const CITATION_TARGET: i64 = 10;

/// Flattened inputs for the local calculator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalSignals {
    pub has_gbp_url: bool,
    /// Present only when the listing was fetched and found.
    pub gbp: Option<GbpSignals>,
    pub nap_complete: bool,
    pub phone_valid: bool,
    pub has_local_business_schema: bool,
    pub mentions_city: bool,
    pub mentions_category: bool,
    pub internal_link_count: i64,
    pub alt_text_coverage: f64,
    pub citation_count: i64,
}

impl LocalSignals {
    pub fn collect(profile: &BusinessProfile, bundle: &SignalBundle) -> Self {
        let page = bundle.page.clone().unwrap_or_default();
        Self {
            has_gbp_url: profile.has_gbp_url(),
            gbp: bundle.gbp.clone().filter(|gbp| gbp.found),
            nap_complete: profile.nap_complete(),
            phone_valid: is_valid_us_phone(&profile.phone),
            has_local_business_schema: page.has_local_business_schema,
            mentions_city: page.mentions_city,
            mentions_category: page.mentions_category,
            internal_link_count: page.internal_link_count,
            alt_text_coverage: page.alt_text_coverage,
            citation_count: bundle.citation_count,
        }
    }
}

pub fn calculate_local_score(signals: &LocalSignals) -> CategoryScore {
    let mut points = 0.0;
    let mut insights = Vec::new();

    if !signals.has_gbp_url {
        insights.push(GBP_URL_MISSING.to_string());
    } else {
        points += GBP_BASE_POINTS;
        match &signals.gbp {
            None => insights.push(GBP_FETCH_FAILED.to_string()),
            Some(gbp) => points += score_gbp(gbp, &mut insights),
        }
    }

    if signals.nap_complete {
        points += NAP_POINTS;
    } else {
        insights.push("Incomplete NAP: business name, phone and ZIP code are all needed".to_string());
    }

    if signals.phone_valid {
        points += PHONE_POINTS;
    } else {
        insights.push("Phone number is missing or not in a valid US format".to_string());
    }

    if signals.has_local_business_schema {
        points += SCHEMA_POINTS;
    } else {
        insights.push("No LocalBusiness structured data found on homepage".to_string());
    }

    if signals.mentions_city {
        points += CITY_POINTS;
    } else {
        insights.push("City name not found on homepage".to_string());
    }

    if signals.mentions_category {
        points += CATEGORY_POINTS;
    } else {
        insights.push(
            "Business category keyword missing from title, meta description and H1".to_string(),
        );
    }

    if signals.internal_link_count >= MIN_INTERNAL_LINKS {
        points += INTERNAL_LINK_POINTS;
    } else {
        insights.push(format!(
            "Only {} internal links on homepage (aim for {}+)",
            signals.internal_link_count.max(0),
            MIN_INTERNAL_LINKS
        ));
    }

    if signals.alt_text_coverage >= MIN_ALT_COVERAGE {
        points += ALT_TEXT_POINTS;
    } else {
        insights.push(format!(
            "Only {:.0}% of images have alt text (aim for {:.0}%+)",
            signals.alt_text_coverage.max(0.0),
            MIN_ALT_COVERAGE
        ));
    }

    let citations = signals.citation_count.max(0);
    let citation_points =
        (citations as f64 / CITATION_TARGET as f64 * CITATION_POINTS).min(CITATION_POINTS);
    points += citation_points;
    if citation_points < CITATION_POINTS {
        insights.push(format!(
            "Listed in {citations} online directories (aim for {CITATION_TARGET}+)"
        ));
    }

    CategoryScore::from_points(points, insights)
}

fn score_gbp(gbp: &GbpSignals, insights: &mut Vec<String>) -> f64 {
    let mut points = 0.0;

    let reviews = gbp.review_count.max(0);
    points += review_points(reviews);
    if reviews == 0 {
        insights.push("Google Business Profile has no reviews yet (aim for 50+)".to_string());
    } else if reviews < 50 {
        insights.push(format!(
            "Google Business Profile has only {reviews} reviews (aim for 50+)"
        ));
    }

    match gbp.rating.filter(|rating| !rating.is_nan()) {
        Some(rating) => {
            points += rating_points(rating);
            if rating < 4.5 {
                insights.push(format!(
                    "Google rating of {rating:.1} is below 4.5 stars"
                ));
            }
        }
        None => insights.push("Google Business Profile has no rating data".to_string()),
    }

    if gbp.has_recent_activity {
        points += GBP_ACTIVITY_POINTS;
    } else {
        insights.push(
            "No recent posts or updates on Google Business Profile".to_string(),
        );
    }

    points
}

fn review_points(reviews: i64) -> f64 {
    match reviews {
        50.. => GBP_REVIEW_POINTS,
        25..=49 => 12.0,
        10..=24 => 8.0,
        1..=9 => 4.0,
        _ => 0.0,
    }
}

fn rating_points(rating: f64) -> f64 {
    if rating >= 4.5 {
        GBP_RATING_POINTS
    } else if rating >= 4.0 {
        7.0
    } else if rating >= 3.5 {
        4.0
    } else {
        2.0
    }
}
