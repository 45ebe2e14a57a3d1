use std::rc::Rc;

use pagewire_core::patch;
use pagewire_core::{DomPatch, PatchOp, Target};
use tracing::{trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement};

use crate::SetupError;

/// The live document plus the accordion triggers discovered at setup.
///
/// Cheap to clone: every field is a JS handle or a shared slice.
#[derive(Clone)]
pub(crate) struct DomSurface {
    document: Document,
    triggers: Rc<[Element]>,
}

impl DomSurface {
    pub(crate) fn new(document: Document) -> Self {
        Self {
            document,
            triggers: Rc::from(Vec::new()),
        }
    }

    /// A surface that also resolves [`Target::Trigger`] indices.
    pub(crate) fn with_triggers(&self, triggers: Vec<Element>) -> Self {
        Self {
            document: self.document.clone(),
            triggers: Rc::from(triggers),
        }
    }

    pub(crate) fn element(&self, id: &str) -> Result<Element, SetupError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| SetupError::MissingElement { id: id.to_string() })
    }

    pub(crate) fn input(&self, id: &str) -> Result<HtmlInputElement, SetupError> {
        self.element(id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| SetupError::WrongElementType {
                id: id.to_string(),
                expected: "input",
            })
    }

    /// Apply patches in order. A patch that cannot be applied is logged and
    /// skipped; the rest still apply.
    pub(crate) fn apply(&self, patches: &[DomPatch]) {
        trace!(patches = %patch::to_json(patches), "apply");
        for patch in patches {
            if let Err(detail) = self.apply_one(patch) {
                warn!(target_element = ?patch.target, %detail, "patch not applied");
            }
        }
    }

    fn resolve(&self, target: &Target) -> Option<Element> {
        match target {
            Target::Root => self.document.document_element(),
            Target::Id(id) => self.document.get_element_by_id(id),
            Target::Trigger(index) => self.triggers.get(*index).cloned(),
        }
    }

    fn apply_one(&self, patch: &DomPatch) -> Result<(), String> {
        let element = self
            .resolve(&patch.target)
            .ok_or_else(|| "element not found".to_string())?;
        match &patch.op {
            PatchOp::SetText { text } => element.set_text_content(Some(text)),
            PatchOp::SetAttribute { name, value } => {
                element.set_attribute(name, value).map_err(|e| js_detail(&e))?;
            }
            PatchOp::SetClass { class, present } => {
                element
                    .class_list()
                    .toggle_with_force(class, *present)
                    .map_err(|e| js_detail(&e))?;
            }
            PatchOp::SetHidden { hidden } => html(&element)?.set_hidden(*hidden),
            PatchOp::SetValue { value } => input(&element)?.set_value(value),
            PatchOp::SetChecked { checked } => input(&element)?.set_checked(*checked),
        }
        Ok(())
    }
}

fn html(element: &Element) -> Result<&HtmlElement, String> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| "not an HTML element".to_string())
}

fn input(element: &Element) -> Result<&HtmlInputElement, String> {
    element
        .dyn_ref::<HtmlInputElement>()
        .ok_or_else(|| "not an input element".to_string())
}

/// Register `handler` for the page lifetime.
pub(crate) fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SetupError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| SetupError::Listener {
            event,
            detail: js_detail(&e),
        })?;
    // Listeners live as long as the page; nothing ever removes them.
    closure.forget();
    Ok(())
}

/// Best-effort human-readable text for a thrown JS value.
pub(crate) fn js_detail(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}
