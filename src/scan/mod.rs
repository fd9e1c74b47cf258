pub mod html;
pub mod schema;

use crate::types::profile::{PageSignals, PerformanceSignals, SignalBundle};
use html::{host_key, is_web_scheme, site_url};
use serde::Serialize;
use url::Url;

/// Signals derived from a homepage document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HtmlSignals {
    pub page: PageSignals,
    pub has_mobile_viewport: bool,
}

/// What the page is expected to mention.
#[derive(Debug, Clone, Default)]
pub struct ScanTarget<'a> {
    pub website: &'a str,
    pub city: &'a str,
    pub category: &'a str,
}

pub fn extract_signals(document: &str, target: &ScanTarget<'_>) -> HtmlSignals {
    let title = html::title(document);
    let meta_description = html::meta_content(document, "description");
    let h1 = html::h1(document);
    let text = html::visible_text(document);

    let (with_alt, images) = html::image_alt_counts(document);
    let alt_text_coverage = if images == 0 {
        100.0
    } else {
        with_alt as f64 / images as f64 * 100.0
    };

    let site = site_url(target.website);
    let internal_link_count = html::hrefs(document)
        .iter()
        .filter(|href| is_internal_link(href, site.as_ref()))
        .count();

    let keyword_fields = [&title, &meta_description, &h1]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    HtmlSignals {
        page: PageSignals {
            has_h1: h1.is_some(),
            has_title: title.is_some(),
            has_meta_description: meta_description.is_some(),
            has_local_business_schema: schema::has_local_business_schema(document),
            alt_text_coverage,
            internal_link_count: i64::try_from(internal_link_count).unwrap_or(i64::MAX),
            word_count: i64::try_from(text.split_whitespace().count()).unwrap_or(i64::MAX),
            mentions_city: contains_phrase(&text, target.city),
            mentions_category: contains_phrase(&keyword_fields, target.category),
        },
        has_mobile_viewport: html::has_meta(document, "viewport"),
    }
}

/// Fills page signals and the viewport flag into a bundle that lacks them.
/// Signals already supplied by upstream providers win.
pub fn merge_into_bundle(signals: HtmlSignals, bundle: &mut SignalBundle) {
    if bundle.page.is_none() {
        bundle.page = Some(signals.page);
    }
    match bundle.performance.as_mut() {
        Some(performance) => performance.has_mobile_viewport |= signals.has_mobile_viewport,
        None => {
            bundle.performance = Some(PerformanceSignals {
                has_mobile_viewport: signals.has_mobile_viewport,
                ..PerformanceSignals::default()
            });
        }
    }
}

/// Same-site http(s) link. Fragment-only links point back at the page itself
/// and are not counted.
fn is_internal_link(href: &str, site: Option<&Url>) -> bool {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return false;
    }
    match site {
        Some(site) => site.join(href).is_ok_and(|resolved| {
            is_web_scheme(&resolved) && host_key(&resolved) == host_key(site)
        }),
        // Without a known site only relative links can be judged internal.
        None => matches!(
            Url::parse(href),
            Err(url::ParseError::RelativeUrlWithoutBase)
        ),
    }
}

fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    let phrase = phrase.trim();
    !phrase.is_empty() && haystack.to_lowercase().contains(&phrase.to_lowercase())
}
