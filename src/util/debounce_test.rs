use super::*;

#[test]
fn latest_ticket_is_current() {
    let debouncer = Debouncer::default();
    let ticket = debouncer.schedule();
    assert!(debouncer.is_current(ticket));
}

#[test]
fn newer_ticket_supersedes_older() {
    let debouncer = Debouncer::default();
    let first = debouncer.schedule();
    let second = debouncer.schedule();
    assert!(!debouncer.is_current(first));
    assert!(debouncer.is_current(second));
}

#[test]
fn cancel_invalidates_pending_ticket() {
    let debouncer = Debouncer::default();
    let ticket = debouncer.schedule();
    debouncer.cancel();
    assert!(!debouncer.is_current(ticket));
}

#[test]
fn clones_share_generation() {
    let debouncer = Debouncer::default();
    let ticket = debouncer.schedule();
    debouncer.clone().schedule();
    assert!(!debouncer.is_current(ticket));
}

#[test]
fn default_delay_is_250ms() {
    assert_eq!(DEFAULT_DEBOUNCE, Duration::from_millis(250));
}
