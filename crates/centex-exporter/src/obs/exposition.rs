//! Prometheus text format (0.0.4) rendering.
//!
//! Each observation becomes a `# HELP` / `# TYPE` pair followed by one
//! unlabelled sample. Only series observed in this pass are written.

use std::fmt::Write;

use centex_core::Observation;

pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Helper to escape HELP text.
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        let sign = if v.is_sign_positive() { "+" } else { "-" };
        format!("{sign}Inf")
    } else {
        v.to_string()
    }
}

/// Render one collection pass.
pub fn render(observations: &[Observation]) -> String {
    let mut out = String::new();
    for obs in observations {
        let id = &obs.identity;
        let _ = writeln!(out, "# HELP {} {}", id.name, escape_help(&id.help));
        let _ = writeln!(out, "# TYPE {} {}", id.name, id.kind.as_str());
        let _ = writeln!(out, "{} {}", id.name, format_value(obs.value));
    }
    out
}
