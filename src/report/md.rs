use crate::types::config::Branding;
use crate::types::report::AuditReport;
use crate::types::scoring::CategoryScore;

pub fn to_markdown(report: &AuditReport, branding: &Branding) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}: {}\n\n", branding.brand_name, report.business));
    output.push_str(&format!(
        "Website: {}\nGenerated: {}\n\n",
        report.website,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "Overall score: {}/100 ({})\n\n",
        report.result.combined,
        report.band.label()
    ));

    push_section(&mut output, "Local SEO", &report.result.local);
    push_section(&mut output, "On-Site SEO", &report.result.onsite);

    if let Some(cta_url) = &branding.cta_url {
        output.push_str(&format!("[{}]({})\n", branding.cta_label, cta_url));
    }

    output
}

fn push_section(output: &mut String, heading: &str, category: &CategoryScore) {
    output.push_str(&format!("## {heading}: {}/100\n\n", category.score));
    if category.insights.is_empty() {
        output.push_str("- no issues found\n\n");
    } else {
        for insight in &category.insights {
            output.push_str(&format!("- {insight}\n"));
        }
        output.push('\n');
    }
}
