//! WASM frontend for pagewire.
//!
//! Exposes a single `initialize(options?)` function to JS. It locates the
//! page's elements, wires DOM events (click, input, change, keydown, submit)
//! to the components in `pagewire-core`, and applies the patches they
//! return. Component state lives for the page session; there is no teardown.
//!
//! Missing markup is a setup fault reported as a rejected call, never
//! papered over with defaults.

mod error;
mod guard;
pub mod logging;

pub use error::SetupError;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::initialize;

/// Native builds compile this crate as a stub so `cargo check --workspace`
/// stays green on non-wasm targets. There is no document to bind to.
#[cfg(not(target_arch = "wasm32"))]
pub fn initialize(_options: Option<&str>) -> Result<(), SetupError> {
    Err(SetupError::NoWindow)
}
