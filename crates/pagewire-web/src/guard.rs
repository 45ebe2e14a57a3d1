use std::cell::Cell;

use crate::SetupError;

/// Once-only latch for `initialize`.
///
/// The latch closes only when the preparation step succeeds, so a call
/// rejected for bad options or a missing window can be retried.
#[derive(Debug, Default)]
pub(crate) struct InitGuard {
    done: Cell<bool>,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl InitGuard {
    pub(crate) const fn new() -> Self {
        Self {
            done: Cell::new(false),
        }
    }

    /// Run `prepare` unless already initialised; close the latch on success.
    pub(crate) fn claim<T>(
        &self,
        prepare: impl FnOnce() -> Result<T, SetupError>,
    ) -> Result<T, SetupError> {
        if self.done.get() {
            return Err(SetupError::AlreadyInitialized);
        }
        let value = prepare()?;
        self.done.set(true);
        Ok(value)
    }
}
