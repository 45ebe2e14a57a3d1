use std::cell::RefCell;
use std::rc::Rc;

use pagewire_core::patch::ARIA_EXPANDED;
use pagewire_core::{
    AccordionConfig, AccordionPanels, ConfigError, CounterAction, CounterConfig, CounterWidget,
    Field, FormValues, PageConfig, PanelPair, SignupConfig, SignupForm, ThemeConfig,
    ThemeController,
};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent, Window};

use crate::SetupError;
use crate::dom::{DomSurface, js_detail, listen};
use crate::guard::InitGuard;
use crate::logging;
use crate::storage::LocalStorageStore;

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

thread_local! {
    static INIT: InitGuard = const { InitGuard::new() };
}

/// Wire the theme toggle, counter, accordion and signup form to the current
/// document.
///
/// `options` is an optional plain object overriding element ids, the
/// accordion selector, the preference key or the log level. Call once, after
/// the document is interactive; a second call is rejected.
#[wasm_bindgen]
pub fn initialize(options: Option<JsValue>) -> Result<(), JsValue> {
    setup(options).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn setup(options: Option<JsValue>) -> Result<(), SetupError> {
    // Nothing is registered before the latch closes, so failures up to here
    // leave the page free to call again.
    let (config, window, document) = INIT.with(|guard| guard.claim(|| prepare(options)))?;
    let surface = DomSurface::new(document.clone());

    wire_theme(&window, &surface, config.theme)?;
    wire_counter(&document, &surface, &config.counter)?;
    let pairs = wire_accordion(&document, &surface, &config.accordion)?;
    wire_signup(&surface, config.signup)?;

    info!(accordion_pairs = pairs, "page behaviours initialized");
    Ok(())
}

fn prepare(options: Option<JsValue>) -> Result<(PageConfig, Window, Document), SetupError> {
    let config = read_config(options)?;
    if !logging::install(&config.log_level)? {
        debug!("tracing subscriber already installed");
    }
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;
    Ok((config, window, document))
}

fn read_config(options: Option<JsValue>) -> Result<PageConfig, SetupError> {
    let Some(options) = options.filter(|value| !value.is_undefined() && !value.is_null()) else {
        return Ok(PageConfig::default());
    };
    let json = js_sys::JSON::stringify(&options)
        .map_err(|e| ConfigError::Parse(js_detail(&e)))?;
    Ok(PageConfig::from_json_str(&String::from(json))?)
}

fn prefers_dark(window: &Window) -> bool {
    matches!(window.match_media(PREFERS_DARK_QUERY), Ok(Some(query)) if query.matches())
}

fn wire_theme(window: &Window, surface: &DomSurface, config: ThemeConfig) -> Result<(), SetupError> {
    let button = surface.element(&config.toggle_id)?;
    let store = LocalStorageStore::from_window(window);
    let (controller, patches) = ThemeController::initialize(store, config, || prefers_dark(window));
    surface.apply(&patches);

    let controller = Rc::new(RefCell::new(controller));
    let surface = surface.clone();
    listen(&button, "click", move |_event| {
        let patches = controller.borrow_mut().toggle();
        surface.apply(&patches);
    })
}

fn wire_counter(
    document: &Document,
    surface: &DomSurface,
    config: &CounterConfig,
) -> Result<(), SetupError> {
    surface.element(&config.display_id)?;
    let buttons = [
        (surface.element(&config.increment_id)?, CounterAction::Increment),
        (surface.element(&config.decrement_id)?, CounterAction::Decrement),
        (surface.element(&config.reset_id)?, CounterAction::Reset),
    ];

    let widget = Rc::new(RefCell::new(CounterWidget::new(config)));
    for (button, action) in buttons {
        let widget = Rc::clone(&widget);
        let surface = surface.clone();
        listen(&button, "click", move |_event| {
            let patches = widget.borrow_mut().apply(action);
            surface.apply(&patches);
        })?;
    }

    // Document-wide: shortcuts work regardless of focus.
    let surface = surface.clone();
    listen(document, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Some(action) = CounterAction::from_key(&key_event.key()) {
            let patches = widget.borrow_mut().apply(action);
            surface.apply(&patches);
        }
    })
}

/// Discover trigger/panel pairs and wire each trigger. Returns the pair count.
fn wire_accordion(
    document: &Document,
    surface: &DomSurface,
    config: &AccordionConfig,
) -> Result<usize, SetupError> {
    let nodes = document
        .query_selector_all(&config.trigger_selector)
        .map_err(|e| SetupError::Selector {
            selector: config.trigger_selector.clone(),
            detail: js_detail(&e),
        })?;

    let mut triggers: Vec<Element> = Vec::with_capacity(nodes.length() as usize);
    let mut pairs = Vec::with_capacity(triggers.capacity());
    for node in (0..nodes.length()).filter_map(|i| nodes.item(i)) {
        let Ok(trigger) = node.dyn_into::<Element>() else {
            continue;
        };
        let index = triggers.len();
        let panel_id = trigger
            .get_attribute("aria-controls")
            .filter(|id| !id.is_empty())
            .ok_or(SetupError::MissingPanelReference { trigger: index })?;
        if document.get_element_by_id(&panel_id).is_none() {
            return Err(SetupError::MissingPanel {
                trigger: index,
                panel: panel_id,
            });
        }
        let expanded = trigger.get_attribute(ARIA_EXPANDED).as_deref() == Some("true");
        pairs.push(PanelPair::new(panel_id, expanded));
        triggers.push(trigger);
    }

    let count = triggers.len();
    let surface = surface.with_triggers(triggers.clone());
    let panels = Rc::new(RefCell::new(AccordionPanels::new(pairs)));
    for (index, trigger) in triggers.iter().enumerate() {
        let panels = Rc::clone(&panels);
        let surface = surface.clone();
        listen(trigger, "click", move |_event| {
            let result = panels.borrow_mut().toggle(index);
            match result {
                Ok(patches) => surface.apply(&patches),
                Err(err) => warn!(%err, "accordion toggle ignored"),
            }
        })?;
    }
    Ok(count)
}

fn wire_signup(surface: &DomSurface, config: SignupConfig) -> Result<(), SetupError> {
    let form_element = surface.element(&config.form_id)?;
    surface.element(&config.status_id)?;

    let mut inputs = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let input = surface.input(config.input_id(field))?;
        surface.element(config.error_id(field))?;
        inputs.push((field, input));
    }

    let values = read_values(&inputs);
    let form = Rc::new(RefCell::new(SignupForm::with_values(config, values)));
    for (field, input) in inputs.iter().cloned() {
        let form = Rc::clone(&form);
        let surface = surface.clone();
        let source = input.clone();
        if field.is_text() {
            listen(&input, "input", move |_event| {
                let patches = form.borrow_mut().set_text(field, source.value());
                surface.apply(&patches);
            })?;
        } else {
            listen(&input, "change", move |_event| {
                let patches = form.borrow_mut().set_checked(source.checked());
                surface.apply(&patches);
            })?;
        }
    }

    let surface = surface.clone();
    listen(&form_element, "submit", move |event| {
        // Nothing is ever sent; the submit is simulated locally.
        event.prevent_default();
        let mut form = form.borrow_mut();
        form.sync_values(read_values(&inputs));
        let report = form.submit();
        surface.apply(&report.patches);
        debug!(accepted = report.outcome.is_accepted(), "signup submitted");
    })
}

/// Snapshot the live input values.
fn read_values(inputs: &[(Field, HtmlInputElement)]) -> FormValues {
    let mut values = FormValues::default();
    for (field, input) in inputs {
        match field {
            Field::Name => values.name = input.value(),
            Field::Email => values.email = input.value(),
            Field::Password => values.password = input.value(),
            Field::Confirm => values.confirm = input.value(),
            Field::Terms => values.terms = input.checked(),
        }
    }
    values
}
