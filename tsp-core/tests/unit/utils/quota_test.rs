use super::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn can_detect_time_quota() {
    assert!(!TimeQuota::new(100.).is_reached());
    assert!(TimeQuota::new(-1.).is_reached());
}

#[test]
fn can_request_stop_and_pause() {
    let control = RunControl::default();
    assert!(!control.is_stopped());
    assert!(!control.is_paused());

    control.request_pause(true);
    assert!(control.is_paused());
    control.request_pause(false);
    assert!(!control.is_paused());

    control.request_stop();
    assert!(control.is_stopped());
    assert!(control.is_reached());
}

#[test]
fn can_resume_paused_worker() {
    let control = Arc::new(RunControl::default());
    control.request_pause(true);

    let worker = {
        let control = control.clone();
        thread::spawn(move || {
            control.wait_while_paused();
            control.is_paused()
        })
    };

    thread::sleep(Duration::from_millis(20));
    assert!(!worker.is_finished());
    control.request_pause(false);

    assert!(!worker.join().unwrap());
}

#[test]
fn can_wake_paused_worker_on_stop() {
    let control = Arc::new(RunControl::default());
    control.request_pause(true);

    let worker = {
        let control = control.clone();
        thread::spawn(move || {
            control.wait_while_paused();
            control.is_stopped()
        })
    };

    control.request_stop();

    assert!(worker.join().unwrap());
    assert!(control.is_paused());
}
