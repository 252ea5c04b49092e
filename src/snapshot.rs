//! Snapshot verification for widget rendering.
//!
//! A snapshot test renders a widget to a bitmap and compares it against a
//! PNG reference committed to the repository. Missing references and pixel
//! mismatches are distinct failures, so "nobody has recorded this yet" is
//! never mistaken for a regression. Running with `UPDATE_SNAPSHOTS=1`
//! rewrites references instead of comparing, and such a run cannot fail on
//! image content.
//!
//! # Reference layout
//!
//! ```text
//! <root>/__snapshots__/<suite>[-<qualifier>]/<name>.png
//! ```
//!
//! The root defaults to the consuming crate's `tests/` directory. The
//! suite identifies the test module recording the reference and is
//! supplied explicitly, most conveniently via [`snapshotter!`](crate::snapshotter);
//! the optional qualifier keeps references from different platforms or
//! configurations apart. On a mismatch the actual rendering is written
//! next to the reference as `<name>.failed.png` and the reference is left
//! untouched.
//!
//! # Comparison
//!
//! [`images_match`] is byte-exact: identical dimensions and identical RGBA
//! content, no tolerance. Adapters are expected to paint deterministically;
//! where rendering is platform-dependent, gate the test with
//! [`snapshot_os_matches`](crate::utils::env::snapshot_os_matches) or
//! record per-platform references with a qualifier.
//!
//! # Example
//!
//! ```ignore
//! use widget_testkit::snapshotter;
//!
//! let shots = snapshotter!();
//! shots.assert_matches(&settings_panel, "defaults");
//! ```

use crate::geometry::Size;
use crate::utils::env;
use crate::widget::{RenderError, Widget};
use image::RgbaImage;
use log::{debug, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory under the configured root that holds all reference images.
pub const SNAPSHOT_DIR: &str = "__snapshots__";

/// Fallback edge length for widgets that report no usable size at all.
const DEFAULT_DIMENSION: u32 = 200;

/// Where snapshot references live and whether to rewrite them.
///
/// Passed explicitly into verification; there is no process-global update
/// flag. [`SnapshotConfig::from_env`] is the supported way to let the
/// environment choose update mode at test time.
#[derive(Clone, Debug)]
pub struct SnapshotConfig {
	/// Directory the `__snapshots__` tree is rooted at.
	pub root: PathBuf,
	/// When true, every verification writes the reference and succeeds.
	pub update: bool,
	/// Optional suffix appended to suite directory names.
	pub qualifier: Option<String>,
}

impl SnapshotConfig {
	/// Compare-mode config rooted at `root`, with no qualifier.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			update: false,
			qualifier: None,
		}
	}

	/// Config populated from the environment.
	///
	/// Update mode comes from `UPDATE_SNAPSHOTS` and the qualifier from
	/// `SNAPSHOT_QUALIFIER`. The root is the consuming crate's `tests/`
	/// directory, resolved through the `CARGO_MANIFEST_DIR` variable at run
	/// time so it points at the crate whose tests are running, not at this
	/// library.
	pub fn from_env() -> Self {
		let manifest_dir = std::env::var_os("CARGO_MANIFEST_DIR")
			.map_or_else(|| PathBuf::from("."), PathBuf::from);
		Self {
			root: manifest_dir.join("tests"),
			update: env::update_snapshots_enabled(),
			qualifier: env::snapshot_qualifier(),
		}
	}

	/// This config with update mode set to `update`.
	pub fn with_update(mut self, update: bool) -> Self {
		self.update = update;
		self
	}

	/// This config with the suite qualifier set.
	pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
		self.qualifier = Some(qualifier.into());
		self
	}

	/// Directory holding the references of `suite`.
	pub fn suite_dir(&self, suite: &str) -> PathBuf {
		let dir_name = match &self.qualifier {
			Some(qualifier) => format!("{suite}-{qualifier}"),
			None => suite.to_string(),
		};
		self.root.join(SNAPSHOT_DIR).join(dir_name)
	}

	/// Path of the reference image for `suite` / `name`.
	pub fn reference_path(&self, suite: &str, name: &str) -> PathBuf {
		self.suite_dir(suite).join(format!("{name}.png"))
	}
}

/// Successful result of a verification call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotOutcome {
	/// Compare mode: the rendering matched the reference.
	Matched,
	/// Update mode: the reference was written at this path.
	Written(PathBuf),
}

/// Errors from snapshot verification.
#[derive(Debug, Error)]
pub enum SnapshotError {
	/// No reference exists yet and update mode is off.
	#[error(
		"snapshot reference not found: {}. Run with {}=1 to write it for the first time.",
		.path.display(),
		env::ENV_UPDATE_SNAPSHOTS
	)]
	MissingReference {
		/// Where the reference was expected to be.
		path: PathBuf,
	},

	/// The rendering differs from the stored reference.
	#[error(
		"snapshot mismatch: {}. Actual rendering written to {}. Run with {}=1 to overwrite.",
		.reference.display(),
		.actual.display(),
		env::ENV_UPDATE_SNAPSHOTS
	)]
	Mismatch {
		/// Reference image the rendering was compared against.
		reference: PathBuf,
		/// Companion file holding the differing rendering.
		actual: PathBuf,
	},

	/// The widget could not be rasterized.
	#[error(transparent)]
	Render(#[from] RenderError),

	/// Reading or writing a snapshot file failed.
	#[error("snapshot io failed for {}: {source}", .path.display())]
	Io {
		/// File the failed operation was addressing.
		path: PathBuf,
		/// Underlying decode, encode, or filesystem error.
		#[source]
		source: image::ImageError,
	},
}

/// Render `widget` and verify it against the reference `suite` / `name`.
///
/// In update mode the reference is written unconditionally (creating
/// parent directories as needed) and the call returns
/// [`SnapshotOutcome::Written`]. In compare mode, a missing reference
/// yields [`SnapshotError::MissingReference`]; otherwise the reference is
/// loaded and compared byte-exactly. On a difference the rendering is
/// saved as `<name>.failed.png` beside the reference and
/// [`SnapshotError::Mismatch`] reports both paths.
pub fn verify_snapshot(
	widget: &dyn Widget,
	suite: &str,
	name: &str,
	config: &SnapshotConfig,
) -> Result<SnapshotOutcome, SnapshotError> {
	let reference = config.reference_path(suite, name);
	let rendered = render_widget(widget)?;

	if config.update {
		write_image(&rendered, &reference)?;
		info!("snapshot reference written: {}", reference.display());
		return Ok(SnapshotOutcome::Written(reference));
	}

	if !reference.exists() {
		return Err(SnapshotError::MissingReference { path: reference });
	}

	let stored = load_image(&reference)?;
	if images_match(&stored, &rendered) {
		debug!("snapshot matched: {}", reference.display());
		return Ok(SnapshotOutcome::Matched);
	}

	let actual = reference.with_extension("failed.png");
	write_image(&rendered, &actual)?;
	Err(SnapshotError::Mismatch { reference, actual })
}

/// Rasterize a widget into a freshly allocated bitmap.
///
/// The canvas is sized from the widget's bounds, falling back per
/// dimension to its preferred size and then to 200 pixels, so a widget
/// that was never laid out still produces a usable rendering.
pub fn render_widget(widget: &dyn Widget) -> Result<RgbaImage, RenderError> {
	let size = snapshot_size(widget);
	let mut canvas = RgbaImage::new(size.width, size.height);
	widget.paint(&mut canvas)?;
	Ok(canvas)
}

fn snapshot_size(widget: &dyn Widget) -> Size {
	let bounds = widget.bounds();
	let preferred = widget.preferred_size();
	Size::new(
		snapshot_dimension(bounds.width, preferred.width),
		snapshot_dimension(bounds.height, preferred.height),
	)
}

fn snapshot_dimension(actual: u32, preferred: u32) -> u32 {
	if actual > 0 {
		actual
	} else if preferred > 0 {
		preferred
	} else {
		DEFAULT_DIMENSION
	}
}

/// Byte-exact image equality: same dimensions, identical RGBA content.
pub fn images_match(a: &RgbaImage, b: &RgbaImage) -> bool {
	a.dimensions() == b.dimensions() && a.as_raw() == b.as_raw()
}

fn write_image(image: &RgbaImage, path: &Path) -> Result<(), SnapshotError> {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).map_err(|err| SnapshotError::Io {
			path: path.to_path_buf(),
			source: image::ImageError::IoError(err),
		})?;
	}
	image.save(path).map_err(|err| SnapshotError::Io {
		path: path.to_path_buf(),
		source: err,
	})
}

fn load_image(path: &Path) -> Result<RgbaImage, SnapshotError> {
	let loaded = image::open(path).map_err(|err| SnapshotError::Io {
		path: path.to_path_buf(),
		source: err,
	})?;
	Ok(loaded.into_rgba8())
}

/// Snapshot capability bound to one test suite.
///
/// Bundles the suite identity with a [`SnapshotConfig`] so individual
/// assertions only name the snapshot. Construct one per test module, most
/// conveniently with [`snapshotter!`](crate::snapshotter).
#[derive(Clone, Debug)]
pub struct Snapshotter {
	suite: String,
	config: SnapshotConfig,
}

impl Snapshotter {
	/// Capability for `suite` configured from the environment.
	pub fn from_env(suite: impl Into<String>) -> Self {
		Self::with_config(suite, SnapshotConfig::from_env())
	}

	/// Capability for `suite` with an explicit configuration.
	pub fn with_config(suite: impl Into<String>, config: SnapshotConfig) -> Self {
		Self {
			suite: suite.into(),
			config,
		}
	}

	/// The suite directory name used under `__snapshots__`.
	pub fn suite(&self) -> &str {
		&self.suite
	}

	/// The configuration verifications run with.
	pub fn config(&self) -> &SnapshotConfig {
		&self.config
	}

	/// Verify `widget` against the reference called `name`.
	pub fn verify(
		&self,
		widget: &dyn Widget,
		name: &str,
	) -> Result<SnapshotOutcome, SnapshotError> {
		verify_snapshot(widget, &self.suite, name, &self.config)
	}

	/// Like [`Snapshotter::verify`], but panics with the error display.
	///
	/// The panic message carries the full diagnostic, including paths and
	/// the update-mode hint, which is what a failing test should print.
	pub fn assert_matches(&self, widget: &dyn Widget, name: &str) {
		if let Err(err) = self.verify(widget, name) {
			panic!("{err}");
		}
	}
}

/// Convert a `module_path!()` value into a suite directory name.
///
/// Path separators become dots so the suite stays a single path component:
/// `my_crate::buttons::tests` becomes `my_crate.buttons.tests`.
pub fn suite_from_module_path(module_path: &str) -> String {
	module_path.replace("::", ".")
}
