use invoicehub_wizard::*;
use std::time::Duration;

#[test]
fn test_default_timings() {
    let timings = SimulationTimings::default();
    assert_eq!(timings.generation_delay(), Duration::from_secs(2));
    assert_eq!(timings.progress_step(), Duration::from_millis(200));
    assert_eq!(
        timings.progress_steps(),
        vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]
    );
}

#[test]
fn test_progress_steps_always_end_at_100() {
    for increment in [0, 1, 3, 7, 10, 33, 100, 200] {
        let timings = SimulationTimings {
            progress_increment: increment,
            ..SimulationTimings::default()
        };
        let steps = timings.progress_steps();
        assert_eq!(steps.first(), Some(&0));
        assert_eq!(steps.last(), Some(&100));
        assert!(steps.windows(2).all(|w| w[0] < w[1]), "{increment}: {steps:?}");
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_timings() {
    use tempfile::NamedTempFile;

    let timings = SimulationTimings {
        generation_delay_ms: 500,
        progress_step_ms: 50,
        progress_increment: 25,
    };

    let temp_file = NamedTempFile::new().unwrap();
    timings.save(temp_file.path()).await.unwrap();
    let loaded = SimulationTimings::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded, timings);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_partial_config_uses_defaults() {
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), br#"{ "progress_step_ms": 5 }"#)
        .await
        .unwrap();

    let loaded = SimulationTimings::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.progress_step_ms, 5);
    assert_eq!(loaded.generation_delay_ms, 2000);
    assert_eq!(loaded.progress_increment, 10);
}
