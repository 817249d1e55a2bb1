use async_trait::async_trait;
use chrono::Local;
use pingr_common::config::ProbeSettings;
use pingr_common::network::target::Target;
use pingr_common::outcome::{ProbeStatus, RoundResult};
use pingr_core::hosts;
use pingr_core::probe::{ProbeError, ProbeReply, Prober};
use pingr_core::runner::{Runner, RunnerSettings};
use pingr_core::store;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Answers by address with a fixed latency per host; unknown hosts time out.
struct LabProber {
    latencies: HashMap<String, f64>,
    delay: Duration,
    calls: AtomicUsize,
}

impl LabProber {
    fn new(hosts: &[(&str, f64)], delay: Duration) -> Self {
        Self {
            latencies: hosts.iter().map(|(a, ms)| (a.to_string(), *ms)).collect(),
            delay,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Prober for LabProber {
    async fn probe(&self, address: &str, _settings: &ProbeSettings) -> ProbeReply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.latencies
            .get(address)
            .copied()
            .ok_or(ProbeError::Timeout)
    }
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pingr-it-{}-{name}", std::process::id()))
}

fn runner(prober: Arc<dyn Prober>, concurrency: usize) -> Runner {
    let settings = RunnerSettings {
        concurrency,
        ..Default::default()
    };
    Runner::new(prober, settings).unwrap()
}

/// Hosts file in, result file out, with a round in between.
#[tokio::test(start_paused = true)]
async fn hosts_file_round_is_saved_as_json() {
    let hosts_path: PathBuf = temp_file("hosts.json");
    std::fs::write(
        &hosts_path,
        r#"{"Core Switch": "10.0.0.1", "Backup Link": "10.0.0.2", "Printer": "10.0.0.3"}"#,
    )
    .unwrap();
    let targets: Vec<Target> = hosts::load_hosts(&hosts_path).unwrap();
    std::fs::remove_file(&hosts_path).unwrap();

    let prober = Arc::new(LabProber::new(
        &[("10.0.0.1", 2.5), ("10.0.0.3", 40.0)],
        Duration::from_millis(50),
    ));
    let round: RoundResult = runner(prober, 2).run_round(&targets).await;

    let statuses: Vec<ProbeStatus> = round.iter().map(|o| o.status()).collect();
    assert_eq!(statuses, [ProbeStatus::Up, ProbeStatus::Down, ProbeStatus::Up]);
    assert_eq!(round.outcomes()[1].error(), Some("Timeout"));

    let results_path: PathBuf = temp_file("results.json");
    store::save_round(&round, &results_path, Local::now()).unwrap();
    let saved: String = std::fs::read_to_string(&results_path).unwrap();
    std::fs::remove_file(&results_path).unwrap();

    let core = saved.find("Core Switch").unwrap();
    let backup = saved.find("Backup Link").unwrap();
    let printer = saved.find("Printer").unwrap();
    assert!(core < backup && backup < printer);
    assert!(saved.contains("\"status\": \"down\""));
    assert!(saved.contains("\"response_time\": 40.0"));
}

#[tokio::test(start_paused = true)]
async fn text_report_lists_every_host_in_order() {
    let targets: Vec<Target> = vec![
        Target::new("A", "10.0.0.1"),
        Target::new("B", "10.0.0.2"),
    ];
    let prober = Arc::new(LabProber::new(&[("10.0.0.1", 5.0)], Duration::ZERO));
    let round: RoundResult = runner(prober, 1).run_round(&targets).await;

    let path: PathBuf = temp_file("results.txt");
    store::save_round(&round, &path, Local::now()).unwrap();
    let saved: String = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let lines: Vec<&str> = saved.lines().collect();
    assert!(lines[0].starts_with("Ping Results - "));
    assert_eq!(lines[1], "=".repeat(50));
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "A (10.0.0.1): UP (5.0ms)");
    assert_eq!(lines[4], "B (10.0.0.2): DOWN");
}

#[tokio::test(start_paused = true)]
async fn continuous_rounds_probe_every_host_each_time() {
    let targets: Vec<Target> = (1..=4)
        .map(|i| Target::new(format!("H{i}"), format!("10.0.1.{i}")))
        .collect();
    let prober = Arc::new(LabProber::new(&[("10.0.1.1", 1.0)], Duration::from_millis(10)));
    let runner: Runner = runner(prober.clone(), 3);

    let cancel = CancellationToken::new();
    let mut seen: Vec<RoundResult> = Vec::new();
    let rounds: usize = runner
        .run_continuous(
            &targets,
            Duration::from_secs(30),
            |round| {
                seen.push(round);
                if seen.len() == 2 {
                    cancel.cancel();
                }
            },
            cancel.clone(),
        )
        .await;

    assert_eq!(rounds, 2);
    assert_eq!(prober.calls.load(Ordering::SeqCst), 8);
    for round in &seen {
        let labels: Vec<&str> = round.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["H1", "H2", "H3", "H4"]);
        assert_eq!(round.summary().up, 1);
        assert_eq!(round.summary().down, 3);
    }
}

#[test]
fn zero_threads_is_rejected() {
    let prober = Arc::new(LabProber::new(&[], Duration::ZERO));
    let settings = RunnerSettings {
        concurrency: 0,
        ..Default::default()
    };
    assert!(Runner::new(prober, settings).is_err());
}
