//! Regex-based helpers for pulling tags, attributes and visible text out of
//! homepage HTML. Not a full parser; tolerant of messy markup.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)([a-z_:][-a-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("valid attribute regex")
});
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title regex"));
static H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1(?:\s[^>]*)?>(.*?)</h1>").expect("valid h1 regex"));
static META: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\s[^>]*>").expect("valid meta regex"));
static IMG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\s[^>]*>").expect("valid img regex"));
static ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\s[^>]*>").expect("valid anchor regex"));
static NON_VISIBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style|noscript|template)[^>]*>.*?</(script|style|noscript|template)>|<!--.*?-->")
        .expect("valid non-visible regex")
});
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").expect("valid entity regex")
});
static TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<[^>]+>").expect("valid tags regex"));

/// Returns the value of attribute `name` inside a single opening tag.
pub fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    ATTRIBUTE.captures_iter(tag).find_map(|cap| {
        let key = cap.get(1)?.as_str();
        if !key.eq_ignore_ascii_case(name) {
            return None;
        }
        cap.get(2)
            .or_else(|| cap.get(3))
            .or_else(|| cap.get(4))
            .map(|value| value.as_str())
    })
}

pub fn title(html: &str) -> Option<String> {
    TITLE
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| clean_text(m.as_str()))
        .filter(|text| !text.is_empty())
}

pub fn h1(html: &str) -> Option<String> {
    H1.captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| clean_text(m.as_str()))
        .find(|text| !text.is_empty())
}

/// Content of the first `<meta name="...">` tag with a non-empty value.
pub fn meta_content(html: &str, name: &str) -> Option<String> {
    META.find_iter(html)
        .map(|m| m.as_str())
        .filter(|tag| attribute(tag, "name").is_some_and(|value| value.eq_ignore_ascii_case(name)))
        .filter_map(|tag| attribute(tag, "content"))
        .map(clean_text)
        .find(|content| !content.is_empty())
}

pub fn has_meta(html: &str, name: &str) -> bool {
    META.find_iter(html)
        .any(|m| attribute(m.as_str(), "name").is_some_and(|value| value.eq_ignore_ascii_case(name)))
}

/// `(images with non-empty alt, all images)`.
pub fn image_alt_counts(html: &str) -> (usize, usize) {
    IMG.find_iter(html).fold((0, 0), |(with_alt, total), m| {
        let has_alt = attribute(m.as_str(), "alt").is_some_and(|alt| !alt.trim().is_empty());
        (with_alt + usize::from(has_alt), total + 1)
    })
}

pub fn hrefs(html: &str) -> Vec<String> {
    ANCHOR
        .find_iter(html)
        .filter_map(|m| attribute(m.as_str(), "href"))
        .map(|href| href.trim().to_string())
        .collect()
}

pub fn visible_text(html: &str) -> String {
    let stripped = NON_VISIBLE.replace_all(html, " ");
    clean_text(&stripped)
}

pub fn clean_text(input: &str) -> String {
    let no_tags = TAGS.replace_all(input, " ");
    decode_entities(&no_tags)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes numeric character references and the named entities common in
/// business names and headings. Unknown entities are left as written.
pub fn decode_entities(input: &str) -> String {
    ENTITY
        .replace_all(input, |cap: &regex::Captures<'_>| {
            let body = &cap[1];
            let decoded = match body.strip_prefix('#') {
                Some(numeric) => numeric_entity(numeric),
                None => named_entity(body),
            };
            decoded.map_or_else(|| cap[0].to_string(), String::from)
        })
        .into_owned()
}

fn numeric_entity(numeric: &str) -> Option<char> {
    let code = match numeric.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => numeric.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

fn named_entity(name: &str) -> Option<char> {
    let decoded = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "hellip" => '\u{2026}',
        "copy" => '\u{A9}',
        "reg" => '\u{AE}',
        "trade" => '\u{2122}',
        "aacute" => '\u{E1}',
        "agrave" => '\u{E0}',
        "acirc" => '\u{E2}',
        "auml" => '\u{E4}',
        "ccedil" => '\u{E7}',
        "eacute" => '\u{E9}',
        "egrave" => '\u{E8}',
        "ecirc" => '\u{EA}',
        "iacute" => '\u{ED}',
        "ntilde" => '\u{F1}',
        "oacute" => '\u{F3}',
        "ouml" => '\u{F6}',
        "uacute" => '\u{FA}',
        "uuml" => '\u{FC}',
        _ => return None,
    };
    Some(decoded)
}

/// Parses a website as entered on a form. A missing scheme means https.
pub fn site_url(website: &str) -> Option<Url> {
    let website = website.trim();
    if website.is_empty() {
        return None;
    }
    let url = if website.contains("://") {
        Url::parse(website)
    } else {
        Url::parse(&format!("https://{website}"))
    };
    url.ok().filter(|url| is_web_scheme(url) && url.host_str().is_some())
}

/// Host with any leading `www.` removed. `Url` already lowercases domains.
pub fn host_key(url: &Url) -> Option<&str> {
    url.host_str()
        .map(|host| host.strip_prefix("www.").unwrap_or(host))
}

pub fn is_web_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
