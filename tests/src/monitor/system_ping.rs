use pingr_common::network::target::Target;
use pingr_core::probe::ping::SystemPing;
use pingr_core::runner::{Runner, RunnerSettings};
use std::sync::Arc;

/// Needs a working `ping` binary, so it only runs on request.
#[tokio::test]
#[ignore]
async fn loopback_round_is_up() {
    let runner = Runner::new(Arc::new(SystemPing::new()), RunnerSettings::default()).unwrap();
    let targets = vec![Target::new("Loopback", "127.0.0.1")];

    let round = runner.run_round(&targets).await;

    assert_eq!(round.len(), 1);
    assert!(round.outcomes()[0].is_up(), "{}", round.outcomes()[0]);
}

#[tokio::test]
#[ignore]
async fn unresolvable_host_is_down() {
    let runner = Runner::new(Arc::new(SystemPing::new()), RunnerSettings::default()).unwrap();
    let targets = vec![Target::new("Nowhere", "host.invalid")];

    let round = runner.run_round(&targets).await;

    assert!(!round.outcomes()[0].is_up());
    assert!(round.outcomes()[0].error().is_some());
}
