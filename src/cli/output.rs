//! Output formatting utilities

use crate::application::StatusReport;
use crate::domain::format_publication_date;

/// Format the per-section status table
pub fn format_status(report: &StatusReport) -> String {
    let date = match format_publication_date(&report.date) {
        d if d.is_empty() => "no publication date".to_string(),
        d => d,
    };

    let mut output = format!("Issue: {}\n", date);
    output.push_str(&format!(
        "{:<16} {:>5} {:>9} {:>14}\n",
        "section", "slots", "domestic", "international"
    ));
    for section in &report.sections {
        output.push_str(&format!(
            "{:<16} {:>5} {:>9} {:>14}\n",
            section.name, section.slots, section.domestic, section.international
        ));
    }
    output
}

/// Format `key = value` lines for `config --list`
pub fn format_config_list(values: &[(&str, String)]) -> String {
    values
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}
