use colored::*;
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS)
}

/// A span that shows a spinner for as long as a round is in flight.
pub fn round_span(hosts: usize) -> Span {
    let span: Span = info_span!("round", hosts, indicatif.pb_show = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(&format!(
        "Probing {} hosts...",
        hosts.to_string().green().bold()
    ));
    span
}
