pub mod html;
pub mod json;
pub mod md;

use crate::error::AuditError;
use crate::types::config::Branding;
use crate::types::report::AuditReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Html,
}

pub fn render(
    report: &AuditReport,
    branding: &Branding,
    format: OutputFormat,
) -> Result<String, AuditError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AuditError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, branding)),
        OutputFormat::Html => Ok(html::to_html(report, branding)),
    }
}
