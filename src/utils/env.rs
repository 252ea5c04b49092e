/// Environment variable that switches snapshot verification into update
/// mode. Truthy values are `1` and `true` (case-insensitive).
pub const ENV_UPDATE_SNAPSHOTS: &str = "UPDATE_SNAPSHOTS";

/// Environment variable holding an optional qualifier appended to snapshot
/// suite directories, for keeping references from different platforms or
/// configurations apart.
pub const ENV_SNAPSHOT_QUALIFIER: &str = "SNAPSHOT_QUALIFIER";

/// Environment variable naming the only operating system snapshot tests
/// should run on. Matched as a substring of [`std::env::consts::OS`].
pub const ENV_SNAPSHOT_OS: &str = "SNAPSHOT_OS";

/// Return true if the environment asks for snapshot references to be
/// rewritten instead of compared.
pub fn update_snapshots_enabled() -> bool {
	std::env::var(ENV_UPDATE_SNAPSHOTS).is_ok_and(|val| is_truthy(&val))
}

/// Qualifier to append to snapshot suite directories, if one is set.
pub fn snapshot_qualifier() -> Option<String> {
	std::env::var(ENV_SNAPSHOT_QUALIFIER)
		.ok()
		.filter(|val| !val.is_empty())
}

/// Return true if snapshot tests should run on this operating system.
/// Prints a skip reason when the gate names a different OS, so gated tests
/// can simply early-return.
pub fn snapshot_os_matches() -> bool {
	let wanted = std::env::var(ENV_SNAPSHOT_OS).unwrap_or_default();
	if wanted.is_empty() {
		return true;
	}

	if os_matches(&wanted, std::env::consts::OS) {
		return true;
	}

	eprintln!(
		"skipping snapshot test: {ENV_SNAPSHOT_OS}={wanted} but running on {}",
		std::env::consts::OS
	);
	false
}

fn is_truthy(val: &str) -> bool {
	val == "1" || val.eq_ignore_ascii_case("true")
}

// Substring match so SNAPSHOT_OS=mac covers "macos".
fn os_matches(wanted: &str, actual: &str) -> bool {
	actual.to_lowercase().contains(&wanted.to_lowercase())
}
