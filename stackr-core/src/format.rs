//! Stateless display formatting
//!
//! Pure string helpers shared by both views. Anything style-related (colors,
//! glyph choice) stays in the cli; these functions only shape text.

use chrono::DateTime;

use crate::model::PortMapping;

/// Compact a daemon status string for the list view.
///
/// "Up 3 days" becomes "Up 3d"; "Exited (1) 2 hours ago" collapses to
/// "Exited"; "Created" collapses to "Created"; anything else is truncated
/// to 12 characters.
pub fn short_status(status: &str) -> String {
    if status.starts_with("Up") {
        let parts: Vec<&str> = status.split_whitespace().collect();
        if parts.len() >= 3 {
            if let Some(unit) = parts[2].chars().next() {
                return format!("Up {}{}", parts[1], unit);
            }
        }
        return status.to_string();
    }
    if status.starts_with("Exited") {
        return "Exited".to_string();
    }
    if status.starts_with("Created") {
        return "Created".to_string();
    }
    truncate(status, 12)
}

/// Comma-joined port list with duplicate `host:container` keys collapsed,
/// first-seen order preserved.
pub fn format_ports(ports: &[PortMapping]) -> String {
    dedup_preserve_order(ports.iter().map(PortMapping::key)).join(",")
}

pub fn dedup_preserve_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

/// Human-scaled byte count, binary (1024-based): "0 B", "1.5 KB", "1.0 GB".
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    const SUFFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT && exp + 1 < SUFFIXES.len() {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.1} {}B", bytes as f64 / div as f64, SUFFIXES[exp])
}

/// Re-render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM:SS`; anything that
/// fails to parse passes through unchanged.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Ellipsis-truncate to at most `max` characters (floor of 4).
pub fn truncate(s: &str, max: usize) -> String {
    let max = max.max(4);
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max {
        return s.to_string();
    }
    let mut out: String = chars[..max - 3].iter().collect();
    out.push_str("...");
    out
}

/// Number of filled cells for a bar of `width`, `percent` in 0-100.
/// Out-of-range percentages clamp to an empty or full bar.
pub fn filled_cells(percent: f64, width: usize) -> usize {
    let filled = ((percent / 100.0) * width as f64) as isize;
    filled.clamp(0, width as isize) as usize
}

/// Proportional bar at character-cell resolution, `percent` in 0-100.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = filled_cells(percent, width);
    let mut bar = String::new();
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_status_up() {
        assert_eq!(short_status("Up 3 days"), "Up 3d");
        assert_eq!(short_status("Up 45 seconds"), "Up 45s");
        // No trailing unit word: passed through untouched.
        assert_eq!(short_status("Up"), "Up");
    }

    #[test]
    fn test_short_status_collapses() {
        assert_eq!(short_status("Exited (1) 2 hours ago"), "Exited");
        assert_eq!(short_status("Created"), "Created");
    }

    #[test]
    fn test_short_status_other_truncates() {
        assert_eq!(
            short_status("Restarting (255) 2 seconds ago"),
            "Restartin..."
        );
    }

    #[test]
    fn test_format_ports_dedup() {
        let ports = vec![
            PortMapping {
                container_port: 80,
                host_port: Some(8080),
            },
            // Same binding reported twice (v4 + v6).
            PortMapping {
                container_port: 80,
                host_port: Some(8080),
            },
            PortMapping {
                container_port: 5432,
                host_port: None,
            },
        ];
        assert_eq!(format_ports(&ports), "8080:80,5432");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_073_741_824), "1.0 GB");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2024-03-01T12:30:05.123456789Z"),
            "2024-03-01 12:30:05"
        );
        // Unparseable input passes through unchanged.
        assert_eq!(format_timestamp("not-a-time"), "not-a-time");
        assert_eq!(
            format_timestamp("0001-01-01T00:00:00Z"),
            "0001-01-01 00:00:00"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 16), "short");
        assert_eq!(truncate("a-rather-long-name", 10), "a-rathe...");
        // Floor keeps at least one visible character.
        assert_eq!(truncate("abcdefgh", 2), "a...");
    }

    #[test]
    fn test_filled_cells_clamped() {
        assert_eq!(filled_cells(50.0, 4), 2);
        assert_eq!(filled_cells(0.0, 3), 0);
        assert_eq!(filled_cells(250.0, 3), 3);
        assert_eq!(filled_cells(-10.0, 3), 0);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(50.0, 4), "██░░");
        assert_eq!(progress_bar(0.0, 3), "░░░");
        assert_eq!(progress_bar(100.0, 3), "███");
        // Over-range input is clamped to the bar width.
        assert_eq!(progress_bar(250.0, 3), "███");
        assert_eq!(progress_bar(-10.0, 3), "░░░");
    }
}
