use owo_colors::OwoColorize;
use tinytemplate::TinyTemplate;

use mythic::pack::Summary;

static TEMPLATE: &'static str = r#"{totalEntries} entries in {totalFiles} files
    valid:              {validEntries}
    with warnings:      {entriesWithWarnings}
    with errors:        {entriesWithErrors}
issues: {criticalErrors} critical, {warnings} warnings, {info} info
missing references: {missingReferences}"#;

/// Render the pack counters as a short block of text, headed by whether
/// the pack is usable.
pub fn render_summary(summary: &Summary) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("summary", TEMPLATE)?;

    let body = tt.render("summary", summary)?;

    let heading = if !summary.is_clean() {
        "failed"
            .bright_red()
            .to_string()
    } else if summary.missing_references > 0 || summary.entries_with_warnings > 0 {
        "incomplete"
            .bright_yellow()
            .to_string()
    } else {
        "ok".bright_green()
            .to_string()
    };

    Ok(format!("{}\n{}", heading, body))
}
