//! Render model: attribute/text assignments produced by component render steps.
//!
//! A [`DomPatch`] names an element ([`Target`]) and one assignment to make on
//! it ([`PatchOp`]). Components never touch the document directly; they
//! return patch batches in application order and the host applies them.
//!
//! Patches serialize to JSON so hosts can trace or replay them.

use serde::Serialize;

/// `aria-pressed` on toggle buttons.
pub const ARIA_PRESSED: &str = "aria-pressed";
/// `aria-expanded` on disclosure triggers.
pub const ARIA_EXPANDED: &str = "aria-expanded";
/// `aria-invalid` on form inputs.
pub const ARIA_INVALID: &str = "aria-invalid";

/// Element addressed by a patch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "ref", rename_all = "snake_case")]
pub enum Target {
    /// The document's root element (`<html>`).
    Root,
    /// Element looked up by its `id` attribute.
    Id(String),
    /// Accordion trigger, by discovery index. Triggers need not carry an id.
    Trigger(usize),
}

impl Target {
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }
}

/// One assignment on a target element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PatchOp {
    /// Replace the element's text content.
    SetText { text: String },
    /// Set an attribute to a string value.
    SetAttribute { name: &'static str, value: String },
    /// Add (`present`) or remove a class.
    SetClass { class: String, present: bool },
    /// Set the `hidden` property.
    SetHidden { hidden: bool },
    /// Set an input's current value.
    SetValue { value: String },
    /// Set a checkbox's checked state.
    SetChecked { checked: bool },
}

/// A single presentation assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomPatch {
    pub target: Target,
    #[serde(flatten)]
    pub op: PatchOp,
}

impl DomPatch {
    #[must_use]
    pub fn text(target: Target, text: impl Into<String>) -> Self {
        Self {
            target,
            op: PatchOp::SetText { text: text.into() },
        }
    }

    #[must_use]
    pub fn attribute(target: Target, name: &'static str, value: impl Into<String>) -> Self {
        Self {
            target,
            op: PatchOp::SetAttribute {
                name,
                value: value.into(),
            },
        }
    }

    /// Boolean attribute rendered as the literal `"true"`/`"false"`.
    #[must_use]
    pub fn flag(target: Target, name: &'static str, value: bool) -> Self {
        Self::attribute(target, name, bool_literal(value))
    }

    #[must_use]
    pub fn class(target: Target, class: impl Into<String>, present: bool) -> Self {
        Self {
            target,
            op: PatchOp::SetClass {
                class: class.into(),
                present,
            },
        }
    }

    #[must_use]
    pub fn hidden(target: Target, hidden: bool) -> Self {
        Self {
            target,
            op: PatchOp::SetHidden { hidden },
        }
    }

    #[must_use]
    pub fn value(target: Target, value: impl Into<String>) -> Self {
        Self {
            target,
            op: PatchOp::SetValue {
                value: value.into(),
            },
        }
    }

    #[must_use]
    pub fn checked(target: Target, checked: bool) -> Self {
        Self {
            target,
            op: PatchOp::SetChecked { checked },
        }
    }
}

#[must_use]
pub const fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Encode a patch batch as a JSON array for logs and replay.
#[must_use]
pub fn to_json(patches: &[DomPatch]) -> String {
    // Every field is a plain string/bool/usize, so encoding cannot fail.
    serde_json::to_string(patches).unwrap_or_default()
}
