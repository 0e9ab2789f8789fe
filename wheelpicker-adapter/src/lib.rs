//! Adapter utilities for the `wheelpicker` crate.
//!
//! The `wheelpicker` crate is UI-agnostic and focuses on the selection math. This crate provides
//! small, framework-neutral helpers commonly needed by hosts:
//!
//! - Per-slot running selections, evaluated for a whole snapshot at once
//! - Snap targets and tween-based corrective scrolling (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod slots;
mod tween;


pub use controller::{Controller, ItemProgress, Selection};
pub use slots::SlotStates;
pub use tween::{Easing, Tween};
