/// Errors reported while resolving [`crate::PickerOptions`].
///
/// These are the only failures in the crate: once a [`crate::Picker`] exists, every update is
/// infallible.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("the backing item list is empty")]
    EmptyItems,
    #[error("visible item count must be at least 1")]
    NoVisibleItems,
    #[error("item size must be a positive finite number of pixels (got {0})")]
    InvalidItemSize(f32),
    #[error("spacing must be a non-negative finite number of pixels (got {0})")]
    InvalidSpacing(f32),
    #[error("available space must be a positive finite number of pixels (got {0})")]
    InvalidAvailableSpace(f32),
}
