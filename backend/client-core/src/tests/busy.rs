use crate::busy::BusyIndicator;

/// **VALUE**: Verifies overlapping operations keep the indicator busy until the last one ends.
///
/// **WHY THIS MATTERS**: A plain on/off flag is cleared by whichever fetch finishes first,
/// hiding that another request is still running.
///
/// **BUG THIS CATCHES**: Would catch a regression to a boolean flag instead of a count.
#[test]
fn given_two_guards_when_first_dropped_then_still_busy() {
    // GIVEN: Two overlapping operations
    let busy = BusyIndicator::new();
    let first = busy.acquire();
    let second = busy.acquire();
    assert_eq!(busy.in_flight(), 2);

    // WHEN: The first finishes
    drop(first);

    // THEN: Still busy until the second finishes
    assert!(busy.is_busy());
    drop(second);
    assert!(!busy.is_busy());
}

/// **VALUE**: Verifies the guard releases on early-return paths too.
///
/// **BUG THIS CATCHES**: Would catch manual start/end bookkeeping that misses an error path.
#[test]
fn given_guard_in_failing_fn_when_fn_returns_early_then_released() {
    fn failing(busy: &BusyIndicator) -> Result<(), &'static str> {
        let _guard = busy.acquire();
        let fetch: Result<(), &'static str> = Err("network down");
        fetch?;
        Ok(())
    }

    let busy = BusyIndicator::new();

    assert!(failing(&busy).is_err());
    assert!(!busy.is_busy());
}

/// **VALUE**: Clones share one count, so the app and the browser see the same state.
#[test]
fn given_cloned_indicator_when_acquired_then_both_report_busy() {
    let busy = BusyIndicator::new();
    let clone = busy.clone();

    let _guard = clone.acquire();

    assert!(busy.is_busy());
}

/// **VALUE**: Subscribers see the count rise and fall as guards come and go.
///
/// **BUG THIS CATCHES**: Would catch guards changing the count without notifying the
/// front end, leaving the loading line stuck on or never shown.
#[tokio::test]
async fn given_subscriber_when_guard_acquired_and_dropped_then_changes_observed() {
    let busy = BusyIndicator::new();
    let mut updates = busy.subscribe();

    let guard = busy.acquire();
    updates.changed().await.unwrap();
    assert_eq!(*updates.borrow_and_update(), 1);

    drop(guard);
    updates.changed().await.unwrap();
    assert_eq!(*updates.borrow_and_update(), 0);
}

/// **VALUE**: The subscription closes when the indicator is gone, so a watcher task ends.
#[tokio::test]
async fn given_subscriber_when_indicator_dropped_then_channel_closed() {
    let busy = BusyIndicator::new();
    let mut updates = busy.subscribe();

    drop(busy);

    assert!(updates.changed().await.is_err());
}
