//! End-to-end behaviour of each page component, driven the way the web
//! frontend drives it: feed events, collect patches, inspect state.

use pagewire_core::patch::{ARIA_EXPANDED, ARIA_INVALID, ARIA_PRESSED};
use pagewire_core::signup::SUCCESS_MESSAGE;
use pagewire_core::validation::EMAIL_MESSAGE;
use pagewire_core::{
    AccordionPanels, CounterAction, CounterConfig, CounterWidget, DomPatch, Field, MemoryStore,
    PageConfig, PanelPair, PatchOp, PreferenceStore, SignupForm, SubmitOutcome, Target,
    ThemeController, ThemeMode,
};
use pretty_assertions::assert_eq;

fn displayed(patches: &[DomPatch]) -> String {
    patches
        .iter()
        .find_map(|p| match &p.op {
            PatchOp::SetText { text } => Some(text.clone()),
            _ => None,
        })
        .expect("display patch")
}

#[test]
fn theme_defaults_light_then_persists_dark_across_reload() {
    let config = PageConfig::default().theme;

    let (mut controller, patches) =
        ThemeController::initialize(MemoryStore::new(), config.clone(), || false);
    assert_eq!(controller.mode(), ThemeMode::Light);
    assert!(patches.contains(&DomPatch::flag(Target::id("themeToggle"), ARIA_PRESSED, false)));

    controller.toggle();
    assert_eq!(controller.mode(), ThemeMode::Dark);
    assert_eq!(controller.store().get("theme"), Ok(Some("dark".into())));

    // Reload: the persisted value wins and the system signal is never read.
    let persisted = controller.store().clone();
    let (reloaded, patches) = ThemeController::initialize(persisted, config, || {
        panic!("system preference consulted despite stored value")
    });
    assert_eq!(reloaded.mode(), ThemeMode::Dark);
    assert!(patches.contains(&DomPatch::class(Target::Root, "dark", true)));
}

#[test]
fn theme_follows_system_signal_when_nothing_stored() {
    let (controller, _) =
        ThemeController::initialize(MemoryStore::new(), PageConfig::default().theme, || true);
    assert_eq!(controller.mode(), ThemeMode::Dark);
    assert!(controller.store().is_empty(), "initialization must not write");
}

#[test]
fn counter_sequence_renders_each_value() {
    let mut counter = CounterWidget::new(&CounterConfig::default());
    let shown: Vec<String> = [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Decrement,
        CounterAction::Reset,
    ]
    .into_iter()
    .map(|action| displayed(&counter.apply(action)))
    .collect();
    assert_eq!(shown, ["1", "2", "1", "0"]);
}

#[test]
fn counter_keys_match_buttons() {
    let mut by_button = CounterWidget::new(&CounterConfig::default());
    let mut by_key = CounterWidget::new(&CounterConfig::default());
    for (action, key) in [
        (CounterAction::Increment, "+"),
        (CounterAction::Increment, "="),
        (CounterAction::Decrement, "-"),
        (CounterAction::Decrement, "-"),
        (CounterAction::Decrement, "-"),
    ] {
        let expected = by_button.apply(action);
        let got = by_key.apply(CounterAction::from_key(key).unwrap());
        assert_eq!(expected, got);
    }
    assert_eq!(by_key.value(), -1);
    assert_eq!(displayed(&by_key.apply(CounterAction::from_key("0").unwrap())), "0");
}

#[test]
fn accordion_toggle_twice_restores_and_isolates() {
    let mut panels = AccordionPanels::new([
        PanelPair::new("faq-a", false),
        PanelPair::new("faq-b", true),
    ]);

    let first = panels.toggle(0).unwrap();
    assert!(first.contains(&DomPatch::hidden(Target::id("faq-a"), false)));
    assert_eq!(panels.is_expanded(1), Some(true));

    let second = panels.toggle(0).unwrap();
    assert_eq!(
        second,
        vec![
            DomPatch::flag(Target::Trigger(0), ARIA_EXPANDED, false),
            DomPatch::hidden(Target::id("faq-a"), true),
        ]
    );
    assert_eq!(panels.is_expanded(0), Some(false));
    assert_eq!(panels.is_expanded(1), Some(true));
}

fn fill(form: &mut SignupForm, email: &str) {
    form.set_text(Field::Name, "Grace Hopper");
    form.set_text(Field::Email, email);
    form.set_text(Field::Password, "Abcdef1!");
    form.set_text(Field::Confirm, "Abcdef1!");
    form.set_checked(true);
}

#[test]
fn submit_all_valid_resets_form() {
    let mut form = SignupForm::new(PageConfig::default().signup);
    fill(&mut form, "grace@navy.mil");

    let report = form.submit();
    assert!(report.outcome.is_accepted());
    assert_eq!(form.status(), SUCCESS_MESSAGE);
    for field in Field::ALL {
        let state = form.field_state(field);
        assert!(!state.is_invalid());
        assert_eq!(state.message(), "");
        assert_eq!(form.values().text(field).unwrap_or(""), "");
    }
    assert!(!form.values().terms);
    assert!(report
        .patches
        .contains(&DomPatch::checked(Target::id("terms"), false)));
}

#[test]
fn submit_with_one_invalid_field_keeps_form() {
    let mut form = SignupForm::new(PageConfig::default().signup);
    fill(&mut form, "grace@navy");

    let report = form.submit();
    assert_eq!(
        report.outcome,
        SubmitOutcome::Rejected {
            invalid: vec![Field::Email]
        }
    );
    assert_eq!(form.status(), "");
    assert_eq!(form.field_state(Field::Email).message(), EMAIL_MESSAGE);
    assert!(report
        .patches
        .contains(&DomPatch::flag(Target::id("email"), ARIA_INVALID, true)));
    for field in [Field::Name, Field::Password, Field::Confirm, Field::Terms] {
        assert_eq!(form.field_state(field).message(), "", "{field:?}");
    }
    assert_eq!(form.values().name, "Grace Hopper");
    assert!(form.values().terms);
    assert!(!report
        .patches
        .iter()
        .any(|p| p.op == PatchOp::SetText { text: SUCCESS_MESSAGE.into() }));
}

#[test]
fn confirm_invalidated_by_later_password_edit() {
    let mut form = SignupForm::new(PageConfig::default().signup);
    form.set_text(Field::Password, "Abcdef1!");
    form.set_text(Field::Confirm, "Abcdef1!");
    assert!(!form.field_state(Field::Confirm).is_invalid());

    form.set_text(Field::Password, "Zyxwvu9?");
    assert!(form.field_state(Field::Confirm).is_invalid());

    form.set_text(Field::Password, "Abcdef1!");
    assert!(!form.field_state(Field::Confirm).is_invalid());
}

#[test]
fn empty_confirm_with_password_fails() {
    let mut form = SignupForm::new(PageConfig::default().signup);
    form.set_text(Field::Password, "Abcdef1!");
    let (ok, _) = form.validate(Field::Confirm);
    assert!(!ok);
}
