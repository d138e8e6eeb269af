use anyhow::Result;
use chrono::{DateTime, NaiveDateTime};
use std::path::Path;

use crate::context::ApiContext;
use crate::controllers::{LoadState, ViewController};
use crate::domain::{Entry, SearchCriteria};

/// Date-only rendering of the serialized timestamp. Unparseable values fall
/// back to the raw string.
fn display_date(raw: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

fn print_view_card(entry: &Entry) {
    match entry.id {
        Some(id) => println!("[{}] {}", id, entry.company),
        None => println!("[-] {}", entry.company),
    }
    println!("    Status: {}", entry.status);
    println!("    Note:   {}", entry.note);
    println!("    Date:   {}", display_date(&entry.date));
}

pub fn handle_view(
    company: Option<String>,
    status: Option<String>,
    date: Option<String>,
    config_dir: &Path,
) -> Result<()> {
    let ctx = ApiContext::load(config_dir)?;
    let mut controller = ViewController::new(ctx.repo);

    controller.set_criteria(SearchCriteria {
        company: company.unwrap_or_default(),
        status: status.unwrap_or_default(),
        date: date.unwrap_or_default(),
    });
    controller.load();

    match controller.state() {
        LoadState::Failed(msg) => anyhow::bail!("{}", msg),
        LoadState::Loading | LoadState::Ready => {}
    }

    println!("Job Applications");
    if !controller.criteria.is_empty() {
        let criteria = &controller.criteria;
        let mut parts = Vec::new();
        if !criteria.company.is_empty() {
            parts.push(format!("company~{}", criteria.company));
        }
        if !criteria.status.is_empty() {
            parts.push(format!("status={}", criteria.status));
        }
        if !criteria.date.is_empty() {
            parts.push(format!("date={}…", criteria.date));
        }
        println!("Filtered by {}", parts.join(", "));
    }
    println!();

    let visible = controller.visible();
    if visible.is_empty() {
        println!("No matching entries.");
        return Ok(());
    }

    for entry in &visible {
        print_view_card(entry);
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_drops_time_component() {
        assert_eq!(display_date("2024-05-01T10:00"), "2024-05-01");
        assert_eq!(display_date("2024-05-01T10:00:30"), "2024-05-01");
        assert_eq!(display_date("2024-05-01T10:00:30+09:00"), "2024-05-01");
    }

    #[test]
    fn test_display_date_falls_back_to_raw() {
        assert_eq!(display_date("sometime soon"), "sometime soon");
        assert_eq!(display_date(""), "");
    }
}
