//! Controls - Bound Input Controls and Labels
//!
//! The parameter store never owns widgets. It reads and writes the form
//! through [`ControlSurface`]; the GUI renders from [`FormControls`] and tests
//! drive it directly.

use std::collections::HashMap;

use crate::domain::encoding::format_wire_number;
use crate::domain::modifiers::{ModifierSlot, ParameterSnapshot};
use crate::utils::format::{format_one_decimal, format_percent};

/// Text labels next to the controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelId {
    /// Value label of a multiplier slider, or the petrol label for the engine slider
    Slot(ModifierSlot),
    /// Derived diesel share label
    Diesel,
}

/// Access to the input controls a page exposes
pub trait ControlSurface {
    /// Current textual value of a control
    fn value(&self, slot: ModifierSlot) -> String;
    fn set_value(&mut self, slot: ModifierSlot, value: String);
    /// Checked state of a checkbox control
    fn checked(&self, slot: ModifierSlot) -> bool;
    fn set_checked(&mut self, slot: ModifierSlot, checked: bool);
    fn label(&self, label: LabelId) -> Option<String>;
    fn set_label(&mut self, label: LabelId, text: String);
}

/// In-memory form
#[derive(Debug, Clone, PartialEq)]
pub struct FormControls {
    values: HashMap<ModifierSlot, String>,
    draw_checked: bool,
    labels: HashMap<LabelId, String>,
}

impl Default for FormControls {
    fn default() -> Self {
        Self::seeded(&ParameterSnapshot::default())
    }
}

impl FormControls {
    /// Form as rendered for the given values, before any script ran on it
    pub fn seeded(snapshot: &ParameterSnapshot) -> Self {
        let mut values = HashMap::new();
        let mut labels = HashMap::new();
        for slot in ModifierSlot::ALL {
            if let Some(n) = snapshot.get(slot).as_number() {
                values.insert(slot, format_wire_number(n));
            }
        }
        for slot in ModifierSlot::MULTIPLIERS {
            labels.insert(
                LabelId::Slot(slot),
                format_one_decimal(snapshot.multipliers[slot.index()]),
            );
        }
        labels.insert(
            LabelId::Slot(ModifierSlot::PetrolShare),
            format_percent(snapshot.petrol_share),
        );
        labels.insert(LabelId::Diesel, format_percent(snapshot.diesel_share()));

        Self {
            values,
            draw_checked: snapshot.draw_zero_values,
            labels,
        }
    }
}

impl ControlSurface for FormControls {
    fn value(&self, slot: ModifierSlot) -> String {
        if slot.is_flag() {
            return self.draw_checked.to_string();
        }
        self.values.get(&slot).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, slot: ModifierSlot, value: String) {
        if slot.is_flag() {
            return;
        }
        self.values.insert(slot, value);
    }

    fn checked(&self, slot: ModifierSlot) -> bool {
        slot.is_flag() && self.draw_checked
    }

    fn set_checked(&mut self, slot: ModifierSlot, checked: bool) {
        if slot.is_flag() {
            self.draw_checked = checked;
        }
    }

    fn label(&self, label: LabelId) -> Option<String> {
        self.labels.get(&label).cloned()
    }

    fn set_label(&mut self, label: LabelId, text: String) {
        self.labels.insert(label, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_form_matches_markup() {
        let form = FormControls::default();
        assert_eq!(form.value(ModifierSlot::Cars), "1");
        assert_eq!(form.value(ModifierSlot::Temperature), "10");
        assert!(form.checked(ModifierSlot::DrawZeroValues));
        assert_eq!(form.label(LabelId::Slot(ModifierSlot::Buses)).as_deref(), Some("1.0"));
        assert_eq!(
            form.label(LabelId::Slot(ModifierSlot::PetrolShare)).as_deref(),
            Some("65.1%")
        );
        assert_eq!(form.label(LabelId::Diesel).as_deref(), Some("34.9%"));
    }

    #[test]
    fn test_flag_only_accepts_checked_state() {
        let mut form = FormControls::default();
        form.set_value(ModifierSlot::DrawZeroValues, "false".to_string());
        assert!(form.checked(ModifierSlot::DrawZeroValues));
        form.set_checked(ModifierSlot::DrawZeroValues, false);
        assert!(!form.checked(ModifierSlot::DrawZeroValues));
        form.set_checked(ModifierSlot::Cars, true);
        assert!(!form.checked(ModifierSlot::Cars));
    }
}
