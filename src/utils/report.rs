// src/utils/report.rs

//! Run report formatting over the `log` facade.
//!
//! Produces the banner/step/summary blocks printed around a crawl.

/// Width of banner and separator lines.
const WIDTH: usize = 60;

/// Log a banner header.
pub fn header(title: &str) {
    let border = "═".repeat(WIDTH);
    log::info!("{}", border);
    log::info!("  {}", title);
    log::info!("{}", border);
}

/// Log a numbered step of a process.
pub fn step(step_num: usize, total: usize, message: &str) {
    log::info!("{}", format_step(step_num, total, message));
}

/// Log an indented sub-item.
pub fn sub_item(message: &str) {
    log::info!("    {}", message);
}

/// Log a separator line.
pub fn separator() {
    log::info!("{}", "─".repeat(WIDTH));
}

/// Log a titled summary of key/value pairs.
pub fn summary(title: &str, items: &[(&str, String)]) {
    for line in format_summary(title, items) {
        log::info!("{}", line);
    }
}

fn format_step(step_num: usize, total: usize, message: &str) -> String {
    format!("[STEP {}/{}] {}", step_num, total, message)
}

fn format_summary(title: &str, items: &[(&str, String)]) -> Vec<String> {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(format!("[SUMMARY] {}", title));
    lines.extend(
        items
            .iter()
            .map(|(key, value)| format!("    {}: {}", key, value)),
    );
    lines
}
