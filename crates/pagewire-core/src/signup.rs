//! Signup form with live per-field validation and a simulated submit.
//!
//! # Invariants
//!
//! 1. A field's error message is non-empty if and only if its last
//!    validation failed.
//! 2. Editing the password re-validates the confirmation in the same call,
//!    after the password itself ([`Field::dependents`]).
//! 3. Submit runs all five validators, even after the first failure, so
//!    every field's error state is current.
//!
//! Nothing is transmitted; an accepted submit only shows a success status
//! and resets the form.

use crate::config::SignupConfig;
use crate::patch::{ARIA_INVALID, DomPatch, Target};
use crate::validation::{
    Checked, Confirmation, Email, Matches, MinTrimmedLength, StrongPassword, ValidationResult,
    Validator,
};

/// Status shown after an accepted submit.
pub const SUCCESS_MESSAGE: &str = "✅ Account created successfully!";

/// The five form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    Confirm,
    Terms,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::Confirm,
        Field::Terms,
    ];

    /// Fields whose validity depends on this field's value.
    #[must_use]
    pub const fn dependents(self) -> &'static [Field] {
        match self {
            Field::Password => &[Field::Confirm],
            _ => &[],
        }
    }

    /// Whether the field is a text input (as opposed to the terms checkbox).
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Field::Terms)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Validity marker and message for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    invalid: bool,
    message: String,
}

impl FieldState {
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.invalid
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn record(&mut self, result: &ValidationResult) {
        match result.error() {
            Some(err) => {
                self.invalid = true;
                self.message.clone_from(&err.message);
            }
            None => self.clear(),
        }
    }

    fn clear(&mut self) {
        self.invalid = false;
        self.message.clear();
    }
}

/// Current input values mirrored from the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub terms: bool,
}

impl FormValues {
    /// Text value of a text field; `None` for [`Field::Terms`].
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::Confirm => Some(&self.confirm),
            Field::Terms => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Confirm => Some(&mut self.confirm),
            Field::Terms => None,
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form was reset.
    Accepted,
    /// At least one field failed; nothing was reset.
    Rejected { invalid: Vec<Field> },
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Outcome plus the patches that present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub outcome: SubmitOutcome,
    pub patches: Vec<DomPatch>,
}

#[derive(Debug, Clone)]
struct FieldValidators {
    name: MinTrimmedLength,
    email: Email,
    password: StrongPassword,
    confirm: Matches,
    terms: Checked,
}

impl Default for FieldValidators {
    fn default() -> Self {
        Self {
            name: MinTrimmedLength::full_name(),
            email: Email::new(),
            password: StrongPassword::new(),
            confirm: Matches::new(),
            terms: Checked::new(),
        }
    }
}

/// Signup form state.
#[derive(Debug, Clone)]
pub struct SignupForm {
    config: SignupConfig,
    values: FormValues,
    states: [FieldState; 5],
    status: String,
    validators: FieldValidators,
}

impl SignupForm {
    #[must_use]
    pub fn new(config: SignupConfig) -> Self {
        Self::with_values(config, FormValues::default())
    }

    /// Start from values already present in the document (e.g. restored by
    /// the browser). No validation runs until the first edit or submit.
    #[must_use]
    pub fn with_values(config: SignupConfig, values: FormValues) -> Self {
        Self {
            config,
            values,
            states: Default::default(),
            status: String::new(),
            validators: FieldValidators::default(),
        }
    }

    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub fn field_state(&self, field: Field) -> &FieldState {
        &self.states[field.index()]
    }

    /// Current aggregate status line.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Record a text input and validate it plus its dependents.
    ///
    /// [`Field::Terms`] is not a text field; use [`Self::set_checked`].
    /// Passing it here changes nothing and returns no patches.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> Vec<DomPatch> {
        let Some(slot) = self.values.text_mut(field) else {
            return Vec::new();
        };
        *slot = value.into();

        let mut patches = Vec::new();
        self.run_validator(field, &mut patches);
        for &dependent in field.dependents() {
            self.run_validator(dependent, &mut patches);
        }
        patches
    }

    /// Record the terms checkbox and validate it.
    pub fn set_checked(&mut self, checked: bool) -> Vec<DomPatch> {
        self.values.terms = checked;
        let mut patches = Vec::new();
        self.run_validator(Field::Terms, &mut patches);
        patches
    }

    /// Validate one field against the current values.
    pub fn validate(&mut self, field: Field) -> (bool, Vec<DomPatch>) {
        let mut patches = Vec::new();
        let ok = self.run_validator(field, &mut patches);
        (ok, patches)
    }

    /// Replace the recorded values with a fresh read of the inputs, without
    /// validating. Inputs can change without an event (native reset,
    /// autofill, script writes), so the frontend calls this before
    /// [`Self::submit`].
    pub fn sync_values(&mut self, values: FormValues) {
        self.values = values;
    }

    /// Validate everything and, if all fields pass, reset the form.
    pub fn submit(&mut self) -> SubmitReport {
        let status = Target::id(self.config.status_id.as_str());
        self.status.clear();
        let mut patches = vec![DomPatch::text(status.clone(), "")];

        // `map` evaluates every element: no validator is skipped.
        let results = Field::ALL.map(|field| self.run_validator(field, &mut patches));
        let invalid: Vec<Field> = Field::ALL
            .into_iter()
            .zip(results)
            .filter_map(|(field, ok)| (!ok).then_some(field))
            .collect();

        if !invalid.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(?invalid, "signup rejected");

            return SubmitReport {
                outcome: SubmitOutcome::Rejected { invalid },
                patches,
            };
        }

        self.status = SUCCESS_MESSAGE.to_string();
        patches.push(DomPatch::text(status, SUCCESS_MESSAGE));

        self.values = FormValues::default();
        for field in Field::ALL {
            let input = Target::id(self.config.input_id(field));
            patches.push(if field.is_text() {
                DomPatch::value(input.clone(), "")
            } else {
                DomPatch::checked(input.clone(), false)
            });
            self.states[field.index()].clear();
            patches.push(DomPatch::flag(input, ARIA_INVALID, false));
            patches.push(DomPatch::text(Target::id(self.config.error_id(field)), ""));
        }

        #[cfg(feature = "tracing")]
        tracing::info!("signup accepted (simulated)");

        SubmitReport {
            outcome: SubmitOutcome::Accepted,
            patches,
        }
    }

    fn check(&self, field: Field) -> ValidationResult {
        let v = &self.validators;
        match field {
            Field::Name => v.name.validate(self.values.name.as_str()),
            Field::Email => v.email.validate(self.values.email.as_str()),
            Field::Password => v.password.validate(self.values.password.as_str()),
            Field::Confirm => v.confirm.validate(&Confirmation {
                password: &self.values.password,
                confirm: &self.values.confirm,
            }),
            Field::Terms => v.terms.validate(&self.values.terms),
        }
    }

    /// Validate `field`, update its state and append its patches.
    fn run_validator(&mut self, field: Field, patches: &mut Vec<DomPatch>) -> bool {
        let result = self.check(field);
        let state = &mut self.states[field.index()];
        state.record(&result);

        patches.push(DomPatch::flag(
            Target::id(self.config.input_id(field)),
            ARIA_INVALID,
            state.invalid,
        ));
        patches.push(DomPatch::text(
            Target::id(self.config.error_id(field)),
            state.message.as_str(),
        ));

        result.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::PatchOp;
    use crate::validation::{CONFIRM_MESSAGE, EMAIL_MESSAGE, NAME_MESSAGE, TERMS_MESSAGE};
    use pretty_assertions::assert_eq;

    fn form() -> SignupForm {
        SignupForm::new(SignupConfig::default())
    }

    fn fill_valid(form: &mut SignupForm) {
        form.set_text(Field::Name, "Ada Lovelace");
        form.set_text(Field::Email, "ada@example.com");
        form.set_text(Field::Password, "Abcdef1!");
        form.set_text(Field::Confirm, "Abcdef1!");
        form.set_checked(true);
    }

    #[test]
    fn fields_start_valid_and_unvalidated() {
        let form = form();
        for field in Field::ALL {
            assert!(!form.field_state(field).is_invalid());
            assert_eq!(form.field_state(field).message(), "");
        }
    }

    #[test]
    fn live_validation_marks_and_clears() {
        let mut form = form();
        let patches = form.set_text(Field::Name, "A");
        assert_eq!(
            patches,
            vec![
                DomPatch::flag(Target::id("name"), ARIA_INVALID, true),
                DomPatch::text(Target::id("nameError"), NAME_MESSAGE),
            ]
        );
        let patches = form.set_text(Field::Name, "Al");
        assert_eq!(
            patches,
            vec![
                DomPatch::flag(Target::id("name"), ARIA_INVALID, false),
                DomPatch::text(Target::id("nameError"), ""),
            ]
        );
    }

    #[test]
    fn password_change_revalidates_confirm() {
        let mut form = form();
        form.set_text(Field::Password, "Abcdef1!");
        form.set_text(Field::Confirm, "Abcdef1!");
        assert!(!form.field_state(Field::Confirm).is_invalid());

        let patches = form.set_text(Field::Password, "Abcdef1!x");
        assert!(form.field_state(Field::Confirm).is_invalid());
        assert_eq!(form.field_state(Field::Confirm).message(), CONFIRM_MESSAGE);
        assert_eq!(patches.len(), 4);
        assert_eq!(
            patches[2],
            DomPatch::flag(Target::id("confirm"), ARIA_INVALID, true)
        );
    }

    #[test]
    fn terms_checkbox_validates() {
        let mut form = form();
        form.set_checked(false);
        assert_eq!(form.field_state(Field::Terms).message(), TERMS_MESSAGE);
        form.set_checked(true);
        assert_eq!(form.field_state(Field::Terms).message(), "");
    }

    #[test]
    fn set_text_ignores_terms() {
        let mut form = form();
        assert!(form.set_text(Field::Terms, "on").is_empty());
        assert!(!form.values().terms);
    }

    #[test]
    fn validate_single_field() {
        let mut form = form();
        let (ok, patches) = form.validate(Field::Email);
        assert!(!ok);
        assert_eq!(
            patches[1],
            DomPatch::text(Target::id("emailError"), EMAIL_MESSAGE)
        );
    }

    #[test]
    fn submit_accepts_and_resets() {
        let mut form = form();
        fill_valid(&mut form);
        let report = form.submit();
        assert_eq!(report.outcome, SubmitOutcome::Accepted);
        assert_eq!(form.status(), SUCCESS_MESSAGE);
        assert_eq!(form.values(), &FormValues::default());
        assert!(report.patches.contains(&DomPatch::text(
            Target::id("formStatus"),
            SUCCESS_MESSAGE
        )));
        assert!(report
            .patches
            .contains(&DomPatch::checked(Target::id("terms"), false)));
        assert!(report
            .patches
            .contains(&DomPatch::value(Target::id("password"), "")));
        assert!(report
            .patches
            .contains(&DomPatch::flag(Target::id("terms"), ARIA_INVALID, false)));
    }

    #[test]
    fn submit_runs_every_validator() {
        let mut form = form();
        let report = form.submit();
        assert_eq!(
            report.outcome,
            SubmitOutcome::Rejected {
                invalid: Field::ALL.to_vec()
            }
        );
        for field in Field::ALL {
            assert!(form.field_state(field).is_invalid(), "{field:?}");
        }
        // status clear + two patches per field
        assert_eq!(report.patches.len(), 11);
    }

    #[test]
    fn rejected_submit_keeps_values_and_clears_status() {
        let mut form = form();
        fill_valid(&mut form);
        form.submit();
        fill_valid(&mut form);
        form.set_text(Field::Email, "nope");

        let report = form.submit();
        assert_eq!(
            report.outcome,
            SubmitOutcome::Rejected {
                invalid: vec![Field::Email]
            }
        );
        assert_eq!(form.status(), "");
        assert_eq!(form.values().email, "nope");
        assert!(report.patches.iter().all(|p| !matches!(
            &p.op,
            PatchOp::SetValue { .. } | PatchOp::SetChecked { .. }
        )));
    }

    #[test]
    fn submit_judges_synced_values_not_earlier_edits() {
        let mut form = form();
        fill_valid(&mut form);
        // Inputs emptied behind the form's back, e.g. by a reset button.
        form.sync_values(FormValues::default());

        let report = form.submit();
        assert_eq!(
            report.outcome,
            SubmitOutcome::Rejected {
                invalid: Field::ALL.to_vec()
            }
        );
        assert_eq!(form.status(), "");
    }

    #[test]
    fn synced_values_can_make_submit_pass() {
        let mut form = form();
        form.set_text(Field::Name, "A");
        assert!(form.field_state(Field::Name).is_invalid());

        form.sync_values(FormValues {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            password: "Abcdef1!".into(),
            confirm: "Abcdef1!".into(),
            terms: true,
        });
        // Syncing alone leaves error states untouched.
        assert!(form.field_state(Field::Name).is_invalid());
        assert!(form.submit().outcome.is_accepted());
    }

    #[test]
    fn with_values_does_not_validate() {
        let values = FormValues {
            name: "x".into(),
            ..FormValues::default()
        };
        let form = SignupForm::with_values(SignupConfig::default(), values);
        assert!(!form.field_state(Field::Name).is_invalid());
        assert_eq!(form.values().name, "x");
    }

    #[test]
    fn dependency_edges() {
        assert_eq!(Field::Password.dependents(), &[Field::Confirm]);
        assert!(Field::Confirm.dependents().is_empty());
        assert!(!Field::Terms.is_text());
    }
}
