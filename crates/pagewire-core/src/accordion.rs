//! Independent trigger/panel disclosure pairs.
//!
//! Each trigger references its panel by id (`aria-controls` in the markup).
//! Triggers are addressed by discovery index since they need not carry an
//! id of their own. Pairs never affect each other; any number may be open.

use std::fmt;

use crate::patch::{ARIA_EXPANDED, DomPatch, Target};

/// Error for a toggle addressed to a trigger that was never registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionError {
    UnknownTrigger(usize),
}

impl fmt::Display for AccordionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTrigger(index) => write!(f, "no accordion trigger at index {index}"),
        }
    }
}

impl std::error::Error for AccordionError {}

/// One trigger and the panel it controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelPair {
    pub panel_id: String,
    pub expanded: bool,
}

impl PanelPair {
    #[must_use]
    pub fn new(panel_id: impl Into<String>, expanded: bool) -> Self {
        Self {
            panel_id: panel_id.into(),
            expanded,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccordionPanels {
    pairs: Vec<PanelPair>,
}

impl AccordionPanels {
    /// Register pairs in trigger discovery order.
    #[must_use]
    pub fn new(pairs: impl IntoIterator<Item = PanelPair>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn is_expanded(&self, trigger: usize) -> Option<bool> {
        self.pairs.get(trigger).map(|pair| pair.expanded)
    }

    /// Flip one pair and return its patches.
    pub fn toggle(&mut self, trigger: usize) -> Result<Vec<DomPatch>, AccordionError> {
        let pair = self
            .pairs
            .get_mut(trigger)
            .ok_or(AccordionError::UnknownTrigger(trigger))?;
        pair.expanded = !pair.expanded;

        #[cfg(feature = "tracing")]
        tracing::debug!(trigger, panel = %pair.panel_id, expanded = pair.expanded, "accordion toggled");

        Ok(render_pair(trigger, pair))
    }

    /// Patches for every pair, in discovery order.
    #[must_use]
    pub fn render(&self) -> Vec<DomPatch> {
        self.pairs
            .iter()
            .enumerate()
            .flat_map(|(index, pair)| render_pair(index, pair))
            .collect()
    }
}

fn render_pair(index: usize, pair: &PanelPair) -> Vec<DomPatch> {
    vec![
        DomPatch::flag(Target::Trigger(index), ARIA_EXPANDED, pair.expanded),
        DomPatch::hidden(Target::id(pair.panel_id.as_str()), !pair.expanded),
    ]
}
