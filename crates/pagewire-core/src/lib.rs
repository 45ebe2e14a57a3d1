#![forbid(unsafe_code)]

//! Host-independent core for the pagewire page behaviours.
//!
//! Every component is a small deterministic state machine whose render step
//! is a pure function from state to a list of [`DomPatch`] assignments. The
//! web frontend (`pagewire-web`) owns the live document and only has to:
//! - forward DOM events into the components,
//! - apply the returned patches,
//! - back [`PreferenceStore`] with `localStorage`.
//!
//! # Components
//!
//! | Module | Behaviour |
//! |--------|-----------|
//! | [`theme`] | Persisted light/dark toggle |
//! | [`counter`] | Integer counter driven by buttons and global key shortcuts |
//! | [`accordion`] | Independent trigger/panel disclosure pairs |
//! | [`signup`] | Signup form with live validation and simulated submit |
//!
//! Nothing here binds to `wasm-bindgen`, so all behaviour is testable natively.

pub mod accordion;
pub mod config;
pub mod counter;
pub mod patch;
pub mod signup;
pub mod storage;
pub mod theme;
pub mod validation;

pub use accordion::{AccordionError, AccordionPanels, PanelPair};
pub use config::{
    AccordionConfig, ConfigError, CounterConfig, PageConfig, SignupConfig, ThemeConfig,
};
pub use counter::{CounterAction, CounterWidget};
pub use patch::{DomPatch, PatchOp, Target};
pub use signup::{Field, FieldState, FormValues, SignupForm, SubmitOutcome, SubmitReport};
pub use storage::{MemoryStore, PreferenceStore, StorageError, StorageResult};
pub use theme::{ThemeController, ThemeMode};
