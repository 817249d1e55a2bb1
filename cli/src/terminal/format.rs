use crate::terminal::colors;
use colored::*;
use console::Alignment;
use pingr_common::outcome::{ProbeOutcome, RoundSummary};

const LABEL_WIDTH: usize = 20;
const ADDRESS_WIDTH: usize = 17;
const STATUS_WIDTH: usize = 9;
const LATENCY_WIDTH: usize = 10;

pub fn status_cell(outcome: &ProbeOutcome) -> ColoredString {
    if outcome.is_up() {
        "✅ UP".color(colors::UP).bold()
    } else {
        "❌ DOWN".color(colors::DOWN).bold()
    }
}

pub fn latency_cell(outcome: &ProbeOutcome) -> ColoredString {
    match outcome.response_time_ms() {
        Some(ms) => format!("{ms:.1}ms").color(colors::LATENCY),
        None => "N/A".color(colors::SEPARATOR),
    }
}

pub fn error_cell(outcome: &ProbeOutcome) -> ColoredString {
    outcome.error().unwrap_or_default().color(colors::DOWN)
}

fn pad(text: &str, width: usize) -> String {
    console::pad_str(text, width, Alignment::Left, Some("…")).into_owned()
}

pub fn table_header() -> String {
    let line: String = format!(
        "{} {} {} {} {}",
        pad("Host", LABEL_WIDTH),
        pad("Address", ADDRESS_WIDTH),
        pad("Status", STATUS_WIDTH),
        pad("Latency", LATENCY_WIDTH),
        "Error"
    );
    format!("{}", line.color(colors::PRIMARY).bold())
}

pub fn table_row(outcome: &ProbeOutcome) -> String {
    let label: String = format!("{}", outcome.label.color(colors::TEXT_DEFAULT));
    let address: String = format!("{}", outcome.address.color(colors::IPV4_ADDR));
    let status: String = format!("{}", status_cell(outcome));
    let latency: String = format!("{}", latency_cell(outcome));

    format!(
        "{} {} {} {} {}",
        pad(&label, LABEL_WIDTH),
        pad(&address, ADDRESS_WIDTH),
        pad(&status, STATUS_WIDTH),
        pad(&latency, LATENCY_WIDTH),
        error_cell(outcome)
    )
    .trim_end()
    .to_string()
}

pub fn failure_line(outcome: &ProbeOutcome) -> String {
    let cause: &str = outcome.error().unwrap_or("DOWN");
    format!(
        "{} {} {} {}",
        status_cell(outcome),
        outcome.label.color(colors::PRIMARY),
        format!("({})", outcome.address).color(colors::SEPARATOR),
        cause.color(colors::DOWN)
    )
}

pub fn summary_lines(summary: &RoundSummary) -> Vec<(String, ColoredString)> {
    let average: ColoredString = match summary.average_response_ms {
        Some(ms) => format!("{ms:.1}ms").color(colors::LATENCY),
        None => "N/A".color(colors::SEPARATOR),
    };

    vec![
        (
            "Total".to_string(),
            summary.total.to_string().color(colors::TEXT_DEFAULT),
        ),
        (
            "Up".to_string(),
            format!("{} ({:.1}%)", summary.up, summary.up_percent()).color(colors::UP),
        ),
        (
            "Down".to_string(),
            format!("{} ({:.1}%)", summary.down, summary.down_percent()).color(colors::DOWN),
        ),
        ("Avg RTT".to_string(), average),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
