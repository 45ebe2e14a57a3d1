//! Integer counter driven by buttons and document-wide key shortcuts.

use crate::config::CounterConfig;
use crate::patch::{DomPatch, Target};

/// A counter mutation. Pointer and keyboard input map to the same actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl CounterAction {
    pub const ALL: [CounterAction; 3] = [Self::Increment, Self::Decrement, Self::Reset];

    /// Map a DOM `KeyboardEvent.key` value to an action.
    ///
    /// `+` and `=` (the unshifted `+` key) increment, `-` decrements, `0` resets.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "+" | "=" => Some(Self::Increment),
            "-" => Some(Self::Decrement),
            "0" => Some(Self::Reset),
            _ => None,
        }
    }
}

/// Counter state plus the id of its display element.
#[derive(Debug, Clone)]
pub struct CounterWidget {
    value: i64,
    display_id: String,
}

impl CounterWidget {
    #[must_use]
    pub fn new(config: &CounterConfig) -> Self {
        Self {
            value: 0,
            display_id: config.display_id.clone(),
        }
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Apply `action` and return the re-rendered display.
    pub fn apply(&mut self, action: CounterAction) -> Vec<DomPatch> {
        // Saturate rather than overflow; no human reaches either bound.
        self.value = match action {
            CounterAction::Increment => self.value.saturating_add(1),
            CounterAction::Decrement => self.value.saturating_sub(1),
            CounterAction::Reset => 0,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(?action, value = self.value, "counter");

        self.render()
    }

    #[must_use]
    pub fn render(&self) -> Vec<DomPatch> {
        vec![DomPatch::text(
            Target::id(self.display_id.as_str()),
            self.value.to_string(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::PatchOp;

    fn shown(patches: &[DomPatch]) -> &str {
        match &patches[0].op {
            PatchOp::SetText { text } => text,
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(CounterAction::from_key("+"), Some(CounterAction::Increment));
        assert_eq!(CounterAction::from_key("="), Some(CounterAction::Increment));
        assert_eq!(CounterAction::from_key("-"), Some(CounterAction::Decrement));
        assert_eq!(CounterAction::from_key("0"), Some(CounterAction::Reset));
        assert_eq!(CounterAction::from_key("1"), None);
        assert_eq!(CounterAction::from_key("Enter"), None);
        assert_eq!(CounterAction::from_key(""), None);
    }

    #[test]
    fn goes_negative() {
        let mut counter = CounterWidget::new(&CounterConfig::default());
        let patches = counter.apply(CounterAction::Decrement);
        assert_eq!(counter.value(), -1);
        assert_eq!(shown(&patches), "-1");
        assert_eq!(patches[0].target, Target::id("count"));
    }

    #[test]
    fn reset_from_anywhere() {
        let mut counter = CounterWidget::new(&CounterConfig::default());
        for _ in 0..5 {
            counter.apply(CounterAction::Increment);
        }
        assert_eq!(shown(&counter.apply(CounterAction::Reset)), "0");
    }
}
