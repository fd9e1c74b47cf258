use crate::types::config::Branding;
use crate::types::report::AuditReport;
use crate::types::scoring::{CategoryScore, ScoreBand};

/// Standalone HTML document suitable for an email body or a PDF renderer.
pub fn to_html(report: &AuditReport, branding: &Branding) -> String {
    let mut output = String::new();
    output.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    output.push_str(&format!(
        "<title>{} | {}</title>\n",
        escape(&branding.brand_name),
        escape(&report.business)
    ));
    output.push_str(STYLE);
    output.push_str("</head>\n<body>\n<main class=\"report\">\n");
    output.push_str(&format!(
        "<h1>{}</h1>\n<p class=\"meta\">{} &middot; {}</p>\n",
        escape(&report.business),
        escape(&report.website),
        report.generated_at.format("%B %-d, %Y")
    ));
    output.push_str(&format!(
        "<div class=\"overall {}\"><span class=\"score\">{}</span><span class=\"band\">{}</span></div>\n",
        band_class(report.band),
        report.result.combined,
        report.band.label()
    ));

    push_section(&mut output, "Local SEO", &report.result.local);
    push_section(&mut output, "On-Site SEO", &report.result.onsite);

    if let Some(cta_url) = &branding.cta_url {
        output.push_str(&format!(
            "<p class=\"cta\"><a href=\"{}\">{}</a></p>\n",
            escape(cta_url),
            escape(&branding.cta_label)
        ));
    }
    output.push_str(&format!(
        "<footer>{}</footer>\n</main>\n</body>\n</html>\n",
        escape(&branding.brand_name)
    ));
    output
}

const STYLE: &str = "<style>
body { font-family: -apple-system, Helvetica, Arial, sans-serif; color: #1f2933; }
.report { max-width: 640px; margin: 0 auto; padding: 24px; }
.overall { display: flex; gap: 12px; align-items: baseline; margin: 16px 0; }
.overall .score { font-size: 48px; font-weight: 700; }
.strong .score { color: #1f9d55; }
.fair .score { color: #d69e2e; }
.weak .score { color: #e53e3e; }
.cta a { display: inline-block; padding: 12px 20px; background: #2563eb; color: #fff; text-decoration: none; border-radius: 6px; }
</style>
";

fn push_section(output: &mut String, heading: &str, category: &CategoryScore) {
    output.push_str(&format!(
        "<section>\n<h2>{heading} <small>{}/100</small></h2>\n",
        category.score
    ));
    if category.insights.is_empty() {
        output.push_str("<p>No issues found.</p>\n");
    } else {
        output.push_str("<ul>\n");
        for insight in &category.insights {
            output.push_str(&format!("<li>{}</li>\n", escape(insight)));
        }
        output.push_str("</ul>\n");
    }
    output.push_str("</section>\n");
}

fn band_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Strong => "strong",
        ScoreBand::Fair => "fair",
        ScoreBand::Weak => "weak",
    }
}

fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
