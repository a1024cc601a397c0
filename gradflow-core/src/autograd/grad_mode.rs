//! Thread-local switch controlling whether operations record graph nodes.
//!
//! Tracking is enabled by default. Inference code wraps its forward pass in
//! [`no_grad`] (or holds a [`NoGradGuard`]) so that no node is attached and
//! no intermediate values are saved.

use std::cell::Cell;

thread_local! {
    static GRAD_ENABLED: Cell<bool> = const { Cell::new(true) };
}

/// Returns `true` if operations on this thread currently record graph nodes.
pub fn is_grad_enabled() -> bool {
    GRAD_ENABLED.with(|enabled| enabled.get())
}

/// Sets the tracking flag for this thread. Prefer [`NoGradGuard`] for scoped changes.
pub fn set_grad_enabled(enabled: bool) {
    GRAD_ENABLED.with(|flag| flag.set(enabled));
}

/// RAII guard disabling gradient tracking until it is dropped.
///
/// Guards nest: each one restores the state that was active when it was
/// created.
#[must_use = "tracking is re-enabled as soon as the guard is dropped"]
pub struct NoGradGuard {
    previous_state: bool,
}

impl Default for NoGradGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl NoGradGuard {
    pub fn new() -> Self {
        let previous_state = is_grad_enabled();
        set_grad_enabled(false);
        NoGradGuard { previous_state }
    }
}

impl Drop for NoGradGuard {
    fn drop(&mut self) {
        set_grad_enabled(self.previous_state);
    }
}

/// Runs `f` with gradient tracking disabled.
pub fn no_grad<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = NoGradGuard::new();
    f()
}

#[cfg(test)]
#[path = "grad_mode_test.rs"]
mod tests;
