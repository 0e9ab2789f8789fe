//! A headless selection engine for circular "wheel picker" lists.
//!
//! For host-side helpers (per-slot bookkeeping, snapping, tween scrolling), see the
//! `wheelpicker-adapter` crate.
//!
//! The list scrolls over an unbounded virtual index space that wraps onto a finite data list.
//! Items near a fixed selector position are scaled up and tinted towards an active color; the
//! item closest to the selector is the current selection.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a visible-items snapshot (virtual index + pixel offset) on every layout pass
//! - the scroll-by requests this crate reports back (it never scrolls on its own)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod color;
mod error;
pub mod geometry;
mod index;
mod options;
mod picker;
mod progress;
mod resolver;
mod types;

#[cfg(test)]
mod tests;

pub use color::{Color, color_for_scale, color_fraction};
pub use error::ConfigError;
pub use index::{DEFAULT_CENTER, InfiniteIndex};
pub use options::{InactiveScale, PickerConfig, PickerOptions, Sizing};
pub use picker::{InitialScroll, Picker};
pub use progress::{AnimationProgress, RunningSelection, compute_progress};
pub use resolver::closest_to_selector;
pub use types::{Orientation, SnapPosition, VisibleItem};
