//! Property tests for the scoring engine over arbitrary, including malformed,
//! profiles and signal bundles.

use super::compute_score;
use super::local::GBP_URL_MISSING;
use super::onsite::UNABLE_TO_ANALYZE;
use crate::types::profile::{
    BusinessProfile, GbpSignals, PageSignals, PerformanceSignals, SignalBundle,
};
use proptest::option;
use proptest::prelude::*;

fn messy_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -10.0..110.0f64,
        1 => any::<f64>(),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn messy_count() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => -20i64..200,
        1 => any::<i64>(),
        1 => Just(i64::MAX),
        1 => Just(i64::MIN),
    ]
}

fn gbp_strategy() -> impl Strategy<Value = GbpSignals> {
    (any::<bool>(), option::of(messy_f64()), messy_count(), any::<bool>()).prop_map(
        |(found, rating, review_count, has_recent_activity)| GbpSignals {
            found,
            rating,
            review_count,
            has_recent_activity,
        },
    )
}

fn page_strategy() -> impl Strategy<Value = PageSignals> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        messy_f64(),
        messy_count(),
        messy_count(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(
                has_h1,
                has_title,
                has_meta_description,
                has_local_business_schema,
                alt_text_coverage,
                internal_link_count,
                word_count,
                mentions_city,
                mentions_category,
            )| PageSignals {
                has_h1,
                has_title,
                has_meta_description,
                has_local_business_schema,
                alt_text_coverage,
                internal_link_count,
                word_count,
                mentions_city,
                mentions_category,
            },
        )
}

fn performance_strategy() -> impl Strategy<Value = PerformanceSignals> {
    (option::of(messy_f64()), option::of(messy_f64()), any::<bool>()).prop_map(
        |(performance_score, seo_score, has_mobile_viewport)| PerformanceSignals {
            performance_score,
            seo_score,
            has_mobile_viewport,
        },
    )
}

fn bundle_strategy() -> impl Strategy<Value = SignalBundle> {
    (
        option::of(gbp_strategy()),
        option::of(page_strategy()),
        option::of(performance_strategy()),
        messy_count(),
    )
        .prop_map(|(gbp, page, performance, citation_count)| SignalBundle {
            gbp,
            page,
            performance,
            citation_count,
        })
}

fn profile_strategy() -> impl Strategy<Value = BusinessProfile> {
    (
        prop_oneof![Just(String::new()), "[A-Za-z &']{1,24}"],
        prop_oneof![
            Just("(512) 555-0100".to_string()),
            Just("555-0100".to_string()),
            "[0-9 ().+-]{0,16}",
        ],
        "[0-9]{0,5}",
        option::of(prop_oneof![
            Just(" ".to_string()),
            "https://maps\\.google\\.com/\\?cid=[0-9]{1,6}",
        ]),
    )
        .prop_map(|(name, phone, zip, gbp_url)| BusinessProfile {
            name,
            website: "https://acmeplumbing.test".to_string(),
            city: "Austin".to_string(),
            category: "plumber".to_string(),
            zip,
            phone,
            gbp_url,
            ..BusinessProfile::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sub_scores_stay_within_0_to_100(
        profile in profile_strategy(),
        bundle in bundle_strategy(),
    ) {
        let result = compute_score(&profile, &bundle);
        prop_assert!(result.local.score <= 100);
        prop_assert!(result.onsite.score <= 100);
        prop_assert!(result.combined <= 100);
    }

    #[test]
    fn combined_is_rounded_mean_of_sub_scores(
        profile in profile_strategy(),
        bundle in bundle_strategy(),
    ) {
        let result = compute_score(&profile, &bundle);
        let mean = (f64::from(result.local.score) + f64::from(result.onsite.score)) / 2.0;
        prop_assert_eq!(result.combined, mean.round() as u8);
    }

    #[test]
    fn scoring_twice_gives_identical_results(
        profile in profile_strategy(),
        bundle in bundle_strategy(),
    ) {
        prop_assert_eq!(compute_score(&profile, &bundle), compute_score(&profile, &bundle));
    }

    #[test]
    fn one_more_review_never_lowers_local_score(
        profile in profile_strategy(),
        bundle in bundle_strategy(),
        gbp in gbp_strategy(),
        reviews in -5i64..500,
    ) {
        let with_reviews = |count: i64| {
            let mut bundle = bundle.clone();
            bundle.gbp = Some(GbpSignals {
                found: true,
                review_count: count,
                ..gbp.clone()
            });
            compute_score(&profile, &bundle).local.score
        };
        prop_assert!(with_reviews(reviews + 1) >= with_reviews(reviews));
    }

    #[test]
    fn missing_gbp_url_leads_local_insights(
        mut profile in profile_strategy(),
        bundle in bundle_strategy(),
    ) {
        profile.gbp_url = None;
        let result = compute_score(&profile, &bundle);
        prop_assert_eq!(result.local.insights[0].as_str(), GBP_URL_MISSING);
        // only non-GBP categories can contribute
        prop_assert!(result.local.score <= 65);
    }

    #[test]
    fn no_page_or_performance_data_is_neutral(
        profile in profile_strategy(),
        gbp in option::of(gbp_strategy()),
        citation_count in messy_count(),
    ) {
        let bundle = SignalBundle {
            gbp,
            citation_count,
            ..SignalBundle::default()
        };
        let result = compute_score(&profile, &bundle);
        prop_assert_eq!(result.onsite.score, 50);
        prop_assert_eq!(result.onsite.insights, vec![UNABLE_TO_ANALYZE.to_string()]);
    }
}
