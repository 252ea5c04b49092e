use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Poll `predicate` until it returns true or `timeout` elapses.
///
/// Returns whether the predicate ever returned true. The predicate is
/// checked once immediately, so an already-true condition succeeds even
/// with a zero timeout. Useful when a test triggers toolkit work that
/// settles on a timer (animations, deferred relayout) before the tree is
/// worth searching or snapshotting.
pub fn wait_until(timeout: Duration, predicate: impl Fn() -> bool) -> bool {
	let start = Instant::now();
	if predicate() {
		return true;
	}
	while start.elapsed() <= timeout {
		std::thread::sleep(POLL_INTERVAL);
		if predicate() {
			return true;
		}
	}
	false
}
