//! # Display Module
//!
//! Renders run outcomes as SwiftBar menu text. The first line is the
//! status-bar label (optionally carrying a ` | color=<name>` suffix), a
//! literal `---` separates it from the dropdown, and dropdown entries may
//! carry `bash=`/`param1=`/`terminal=`/`refresh=` directives that the
//! host executes, not this program.

use chrono::{DateTime, Utc};
use std::path::Path;

use crate::config::ConfigPaths;
use crate::usage_api::{UsagePeriod, UsageSnapshot};

const SEPARATOR: &str = "---";

/// Status-bar label color for a utilization percentage. `None` below the
/// warning threshold: the color directive is omitted entirely, not
/// rendered empty.
pub fn usage_color(pct: f64) -> Option<&'static str> {
    if pct >= 95.0 {
        Some("red")
    } else if pct >= 80.0 {
        Some("orange")
    } else {
        None
    }
}

/// Human-readable delta until a reset timestamp, anchored to the passed
/// `now` so rendering is deterministic under test.
///
/// Missing or unparsable input renders `unknown`; a delta of exactly 24
/// hours renders in the day form (`1d 0h`).
pub fn format_time_until(resets_at: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = resets_at.map(str::trim).filter(|s| !s.is_empty()) else {
        return "unknown".to_string();
    };
    let Ok(reset) = DateTime::parse_from_rfc3339(raw) else {
        return "unknown".to_string();
    };

    let secs = (reset.with_timezone(&Utc) - now).num_seconds();
    if secs <= 0 {
        return "now".to_string();
    }
    if secs < 24 * 3600 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86_400, (secs % 86_400) / 3600)
    }
}

fn menu(header: &str, lines: &[String]) -> String {
    let mut out = String::new();
    out.push_str(header);
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn edit_config_item(env_file: &Path) -> String {
    format!(
        "Edit config | bash=open param1={} terminal=false",
        env_file.display()
    )
}

/// Home directory could not be determined.
pub fn build_home_error() -> String {
    menu(
        "C: ERR | color=red",
        &["Cannot determine home directory".to_string()],
    )
}

/// Credentials file missing or unreadable: point at the expected path and
/// offer to create/open the config directory.
pub fn build_config_missing(paths: &ConfigPaths) -> String {
    menu(
        "C: CFG | color=red",
        &[
            "Cannot read config file".to_string(),
            format!("Expected: {}", paths.file.display()),
            SEPARATOR.to_string(),
            format!(
                "Create config dir | bash=mkdir param1=-p param2={} terminal=false",
                paths.dir.display()
            ),
            format!(
                "Open config dir | bash=open param1={} terminal=false",
                paths.dir.display()
            ),
        ],
    )
}

/// Credentials file present but a required key is missing or empty.
pub fn build_config_incomplete(env_file: &Path) -> String {
    menu(
        "C: CFG | color=red",
        &[
            "Missing CLAUDE_ORG_ID or CLAUDE_SESSION_KEY".to_string(),
            edit_config_item(env_file),
        ],
    )
}

/// Connection, transport, or timeout failure.
pub fn build_network_error() -> String {
    menu("C: --/-- | color=gray", &["Network error".to_string()])
}

/// Session cookie rejected: walk the user through refreshing it.
pub fn build_auth_error(env_file: &Path) -> String {
    menu(
        "C: AUTH | color=red",
        &[
            "Session expired - refresh cookie".to_string(),
            SEPARATOR.to_string(),
            "1. Open claude.ai in browser".to_string(),
            "2. DevTools > Application > Cookies".to_string(),
            "3. Copy sessionKey value".to_string(),
            SEPARATOR.to_string(),
            edit_config_item(env_file),
        ],
    )
}

/// Endpoint reachable but reported no usable windows.
pub fn build_unavailable() -> String {
    menu(
        "C: N/A | color=gray",
        &[
            "Usage data unavailable".to_string(),
            "Anthropic API returning nulls".to_string(),
            SEPARATOR.to_string(),
            "Refresh | refresh=true".to_string(),
        ],
    )
}

/// Successful snapshot: percentages in the status bar, reset countdowns
/// in the dropdown. An absent window reads as 0% for both the label and
/// the color rule.
pub fn build_usage(snapshot: &UsageSnapshot, env_file: &Path, now: DateTime<Utc>) -> String {
    let (session_pct, session_reset) = period_parts(snapshot.five_hour.as_ref());
    let (weekly_pct, weekly_reset) = period_parts(snapshot.seven_day.as_ref());

    let color = usage_color(session_pct.max(weekly_pct))
        .map(|c| format!(" | color={c}"))
        .unwrap_or_default();

    menu(
        &format!("C: {session_pct:.0}%/{weekly_pct:.0}%{color}"),
        &[
            format!(
                "Session: {session_pct:.0}% (resets in {})",
                format_time_until(session_reset, now)
            ),
            format!(
                "Weekly: {weekly_pct:.0}% (resets in {})",
                format_time_until(weekly_reset, now)
            ),
            SEPARATOR.to_string(),
            "Refresh | refresh=true".to_string(),
            edit_config_item(env_file),
        ],
    )
}

fn period_parts(period: Option<&UsagePeriod>) -> (f64, Option<&str>) {
    match period {
        Some(p) => (p.utilization, p.resets_at.as_deref()),
        None => (0.0, None),
    }
}
