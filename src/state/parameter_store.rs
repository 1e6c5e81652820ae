//! ParameterStore - Live and Committed Modifier Snapshots
//!
//! The live snapshot follows every input event and only feeds the labels.
//! The committed snapshot is captured at startup and on explicit commits; it is
//! the only one ever encoded for the server.

use tracing::{debug, info, warn};

use crate::domain::encoding::{encode, format_wire_number, EncodedParams};
use crate::domain::modifiers::{ModifierSlot, ModifierValue, ParameterSnapshot};
use crate::error::{Error, Result};
use crate::state::controls::{ControlSurface, FormControls, LabelId};
use crate::utils::format::{format_display_number, format_one_decimal, format_percent};

/// Raw input delivered by a control event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputValue<'a> {
    /// Text of a slider or number input
    Raw(&'a str),
    /// Checked state of a checkbox
    Checked(bool),
}

struct Validated {
    value: f64,
    adjusted: bool,
}

/// Owner of the modifier state for one session
#[derive(Debug, Clone)]
pub struct ParameterStore<C: ControlSurface = FormControls> {
    controls: C,
    live: ParameterSnapshot,
    committed: ParameterSnapshot,
}

impl Default for ParameterStore<FormControls> {
    fn default() -> Self {
        Self::new(FormControls::default())
    }
}

impl<C: ControlSurface> ParameterStore<C> {
    /// Both snapshots start at the documented defaults
    pub fn new(controls: C) -> Self {
        Self {
            controls,
            live: ParameterSnapshot::default(),
            committed: ParameterSnapshot::default(),
        }
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn live(&self) -> &ParameterSnapshot {
        &self.live
    }

    pub fn committed(&self) -> &ParameterSnapshot {
        &self.committed
    }

    /// Whether the live snapshot differs from what the server last received
    pub fn is_dirty(&self) -> bool {
        self.live != self.committed
    }

    /// Read every control, normalise its displayed value and populate both
    /// snapshots. A control holding an unusable value falls back to the slot
    /// default.
    pub fn initialize_from_controls(&mut self) {
        let defaults = ParameterSnapshot::default();

        for slot in ModifierSlot::ALL {
            if slot.is_flag() {
                self.live.draw_zero_values = self.controls.checked(slot);
                continue;
            }

            let raw = self.controls.value(slot);
            let value = match validate(slot, &raw) {
                Ok(validated) => validated.value,
                Err(e) => {
                    warn!("{e}; using default");
                    defaults.get(slot).as_number().unwrap_or_default()
                }
            };
            self.live.set(slot, ModifierValue::Number(value));
            self.controls.set_value(slot, control_text(slot, value));
        }

        self.refresh_labels();
        self.warn_if_bounds_inverted();
        self.committed = self.live;
        info!("Modifiers initialised: {}", self.encoded());
    }

    /// Apply one input event to the live snapshot and its label.
    ///
    /// Unparseable or non-finite numbers are rejected and leave the snapshot
    /// untouched. Finite values are snapped to the slot's step precision and
    /// clamped to its domain; an adjusted value is written back to the control.
    pub fn on_input(&mut self, slot: ModifierSlot, input: InputValue<'_>) -> Result<ModifierValue> {
        match (slot.is_flag(), input) {
            (true, InputValue::Checked(checked)) => {
                self.controls.set_checked(slot, checked);
                self.live.draw_zero_values = checked;
                debug!("{slot} = {checked}");
                Ok(ModifierValue::Flag(checked))
            }
            (true, InputValue::Raw(_)) | (false, InputValue::Checked(_)) => {
                let value = match input {
                    InputValue::Raw(raw) => raw.to_string(),
                    InputValue::Checked(checked) => checked.to_string(),
                };
                Err(Error::InvalidModifier {
                    slot: slot.control_name(),
                    value,
                })
            }
            (false, InputValue::Raw(raw)) => {
                let validated = validate(slot, raw).inspect_err(|e| warn!("{e}"))?;
                if validated.adjusted {
                    warn!("{slot}: {raw:?} adjusted to {}", validated.value);
                    self.controls
                        .set_value(slot, control_text(slot, validated.value));
                } else {
                    self.controls.set_value(slot, raw.trim().to_string());
                }

                self.live.set(slot, ModifierValue::Number(validated.value));
                self.refresh_label(slot);
                if matches!(slot, ModifierSlot::LowerBound | ModifierSlot::UpperBound) {
                    self.warn_if_bounds_inverted();
                }
                debug!("{slot} = {}", validated.value);
                Ok(ModifierValue::Number(validated.value))
            }
        }
    }

    /// Move a numeric slot by whole steps of its domain
    pub fn nudge(&mut self, slot: ModifierSlot, steps: i32) -> Result<ModifierValue> {
        let (Some(domain), Some(current)) = (slot.domain(), self.live.get(slot).as_number()) else {
            return Err(Error::Invalid {
                message: format!("'{slot}' is not a numeric modifier"),
            });
        };
        let raw = format_wire_number(domain.nudge(current, steps));
        self.on_input(slot, InputValue::Raw(&raw))
    }

    /// Freeze the live snapshot into the committed one
    pub fn commit(&mut self) -> EncodedParams {
        self.committed = self.live;
        let encoded = self.encoded();
        info!("Modifiers committed: {encoded}");
        encoded
    }

    /// Restore every control and the live snapshot to the defaults.
    /// Nothing is committed.
    pub fn reset(&mut self) {
        let defaults = ParameterSnapshot::default();
        self.write_controls(&defaults);
        self.live = defaults;
        self.refresh_labels();
        debug!("Modifiers reset to defaults (uncommitted)");
    }

    /// Seed controls and both snapshots from a previously committed snapshot.
    /// Numbers are held to the same domain and precision as typed input; a
    /// non-finite number falls back to the slot default.
    pub fn restore(&mut self, snapshot: ParameterSnapshot) {
        let snapshot = sanitize(snapshot);
        self.write_controls(&snapshot);
        self.live = snapshot;
        self.committed = snapshot;
        self.refresh_labels();
        self.warn_if_bounds_inverted();
        info!("Modifiers restored: {}", self.encoded());
    }

    /// Encoding of the committed snapshot
    pub fn encoded(&self) -> EncodedParams {
        encode(&self.committed)
    }

    fn write_controls(&mut self, snapshot: &ParameterSnapshot) {
        for slot in ModifierSlot::ALL {
            match snapshot.get(slot) {
                ModifierValue::Number(n) => self.controls.set_value(slot, format_wire_number(n)),
                ModifierValue::Flag(b) => self.controls.set_checked(slot, b),
            }
        }
    }

    fn refresh_labels(&mut self) {
        for slot in ModifierSlot::MULTIPLIERS {
            self.refresh_label(slot);
        }
        self.refresh_label(ModifierSlot::PetrolShare);
    }

    fn refresh_label(&mut self, slot: ModifierSlot) {
        if slot.is_multiplier() {
            let text = format_one_decimal(self.live.multipliers[slot.index()]);
            self.controls.set_label(LabelId::Slot(slot), text);
        } else if slot == ModifierSlot::PetrolShare {
            self.controls
                .set_label(LabelId::Slot(slot), format_percent(self.live.petrol_share));
            self.controls
                .set_label(LabelId::Diesel, format_percent(self.live.diesel_share()));
        }
    }

    fn warn_if_bounds_inverted(&self) {
        if self.live.bounds_inverted() {
            warn!(
                "Lower display bound {} is above upper bound {}",
                self.live.lower_bound, self.live.upper_bound
            );
        }
    }
}

/// Text written back into a control after normalisation
fn control_text(slot: ModifierSlot, value: f64) -> String {
    match slot {
        ModifierSlot::Temperature | ModifierSlot::LowerBound | ModifierSlot::UpperBound => {
            format_display_number(value)
        }
        _ => format_wire_number(value),
    }
}

fn validate(slot: ModifierSlot, raw: &str) -> Result<Validated> {
    let invalid = || Error::InvalidModifier {
        slot: slot.control_name(),
        value: raw.to_string(),
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(invalid)?;
    let domain = slot.domain().ok_or_else(invalid)?;
    let snapped = domain.nudge(value, 0);
    Ok(Validated {
        value: snapped,
        adjusted: snapped != value,
    })
}

fn sanitize(mut snapshot: ParameterSnapshot) -> ParameterSnapshot {
    let defaults = ParameterSnapshot::default();
    for slot in ModifierSlot::ALL {
        let (Some(domain), Some(value)) = (slot.domain(), snapshot.get(slot).as_number()) else {
            continue;
        };
        let fixed = if value.is_finite() {
            domain.nudge(value, 0)
        } else {
            defaults.get(slot).as_number().unwrap_or_default()
        };
        if fixed != value {
            warn!("Saved {slot} {value} adjusted to {fixed}");
            snapshot.set(slot, ModifierValue::Number(fixed));
        }
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ParameterStore {
        let mut store = ParameterStore::default();
        store.initialize_from_controls();
        store
    }

    #[test]
    fn test_encode_before_commit_is_default() {
        let store = ParameterStore::default();
        assert_eq!(store.encoded().as_str(), "1,1,1,1,1,65.1,10,true,0,100");
    }

    #[test]
    fn test_initialize_normalises_number_inputs() {
        let mut form = FormControls::default();
        form.set_value(ModifierSlot::Temperature, "10".to_string());
        form.set_value(ModifierSlot::UpperBound, " 90 ".to_string());
        form.set_value(ModifierSlot::Cars, "2.5".to_string());
        let mut store = ParameterStore::new(form);
        store.initialize_from_controls();

        assert_eq!(store.controls().value(ModifierSlot::Temperature), "10.0");
        assert_eq!(store.controls().value(ModifierSlot::UpperBound), "90.0");
        assert_eq!(store.live().temperature, 10.0);
        assert_eq!(store.committed().multipliers[1], 2.5);
        assert_eq!(
            store.controls().label(LabelId::Slot(ModifierSlot::Cars)).as_deref(),
            Some("2.5")
        );
        assert_eq!(store.encoded().as_str(), "1,2.5,1,1,1,65.1,10,true,0,90");
    }

    #[test]
    fn test_initialize_falls_back_on_garbage() {
        let mut form = FormControls::default();
        form.set_value(ModifierSlot::Temperature, "warm".to_string());
        let mut store = ParameterStore::new(form);
        store.initialize_from_controls();
        assert_eq!(store.live().temperature, 10.0);
        assert_eq!(store.controls().value(ModifierSlot::Temperature), "10.0");
    }

    #[test]
    fn test_multiplier_input_updates_label_without_suffix() {
        let mut store = store();
        store
            .on_input(ModifierSlot::Buses, InputValue::Raw("3"))
            .expect("valid");
        assert_eq!(store.live().multipliers[2], 3.0);
        assert_eq!(
            store.controls().label(LabelId::Slot(ModifierSlot::Buses)).as_deref(),
            Some("3.0")
        );
    }

    #[test]
    fn test_petrol_input_updates_diesel_label() {
        let mut store = store();
        store
            .on_input(ModifierSlot::PetrolShare, InputValue::Raw("40"))
            .expect("valid");
        assert_eq!(
            store.controls().label(LabelId::Slot(ModifierSlot::PetrolShare)).as_deref(),
            Some("40.0%")
        );
        assert_eq!(store.controls().label(LabelId::Diesel).as_deref(), Some("60.0%"));
    }

    #[test]
    fn test_diesel_label_mirrors_petrol_label() {
        let mut store = store();
        for i in 0..=1000u32 {
            let raw = format_wire_number(f64::from(i) / 10.0);
            store
                .on_input(ModifierSlot::PetrolShare, InputValue::Raw(&raw))
                .expect("valid");
            let expected = format_percent(f64::from(1000 - i) / 10.0);
            assert_eq!(store.controls().label(LabelId::Diesel), Some(expected));
        }
    }

    fn percent_label(store: &ParameterStore, id: LabelId) -> f64 {
        store
            .controls()
            .label(id)
            .and_then(|l| l.trim_end_matches('%').parse().ok())
            .expect("percent label")
    }

    #[test]
    fn test_off_grid_petrol_share_is_snapped() {
        let mut store = store();
        store
            .on_input(ModifierSlot::PetrolShare, InputValue::Raw("0.05"))
            .expect("valid");
        assert_eq!(store.live().petrol_share, 0.1);
        assert_eq!(store.controls().value(ModifierSlot::PetrolShare), "0.1");
        assert_eq!(store.controls().label(LabelId::Diesel).as_deref(), Some("99.9%"));

        for raw in ["12.35", "33.333", "99.95", "64.449"] {
            store
                .on_input(ModifierSlot::PetrolShare, InputValue::Raw(raw))
                .expect("valid");
            let petrol = percent_label(&store, LabelId::Slot(ModifierSlot::PetrolShare));
            let diesel = percent_label(&store, LabelId::Diesel);
            assert!((petrol + diesel - 100.0).abs() < 1e-9, "{raw}: {petrol} + {diesel}");
        }
    }

    #[test]
    fn test_flag_uses_checked_state() {
        let mut store = store();
        let value = store
            .on_input(ModifierSlot::DrawZeroValues, InputValue::Checked(false))
            .expect("valid");
        assert_eq!(value, ModifierValue::Flag(false));
        assert!(!store.live().draw_zero_values);
        assert!(
            store
                .on_input(ModifierSlot::DrawZeroValues, InputValue::Raw("false"))
                .is_err()
        );
        assert!(
            store
                .on_input(ModifierSlot::Cars, InputValue::Checked(true))
                .is_err()
        );
    }

    #[test]
    fn test_live_changes_do_not_reach_encoder() {
        let mut store = store();
        let before = store.encoded();
        store
            .on_input(ModifierSlot::Cars, InputValue::Raw("7.5"))
            .expect("valid");
        store
            .on_input(ModifierSlot::Temperature, InputValue::Raw("-20"))
            .expect("valid");
        assert!(store.is_dirty());
        assert_eq!(store.encoded(), before);

        let committed = store.commit();
        assert_eq!(committed.as_str(), "1,7.5,1,1,1,65.1,-20,true,0,100");
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_reset_then_commit_reproduces_defaults() {
        let mut store = store();
        store
            .on_input(ModifierSlot::HeavyGoods, InputValue::Raw("4.2"))
            .expect("valid");
        store
            .on_input(ModifierSlot::DrawZeroValues, InputValue::Checked(false))
            .expect("valid");
        store.commit();

        store.reset();
        assert_eq!(store.live(), &ParameterSnapshot::default());
        assert_eq!(store.encoded().as_str(), "1,1,1,1,4.2,65.1,10,false,0,100");
        assert_eq!(store.controls().value(ModifierSlot::HeavyGoods), "1");
        assert!(store.controls().checked(ModifierSlot::DrawZeroValues));

        assert_eq!(store.commit().as_str(), "1,1,1,1,1,65.1,10,true,0,100");
    }

    #[test]
    fn test_rejects_unparseable_input() {
        let mut store = store();
        let err = store
            .on_input(ModifierSlot::Cars, InputValue::Raw("lots"))
            .expect_err("rejected");
        assert!(matches!(err, Error::InvalidModifier { slot: "cars", .. }));
        assert!(
            store
                .on_input(ModifierSlot::Cars, InputValue::Raw("NaN"))
                .is_err()
        );
        assert_eq!(store.live().multipliers[1], 1.0);
    }

    #[test]
    fn test_clamps_out_of_range_input() {
        let mut store = store();
        store
            .on_input(ModifierSlot::Cars, InputValue::Raw("12"))
            .expect("clamped");
        assert_eq!(store.live().multipliers[1], 10.0);
        assert_eq!(store.controls().value(ModifierSlot::Cars), "10");

        store
            .on_input(ModifierSlot::Temperature, InputValue::Raw("-60"))
            .expect("clamped");
        assert_eq!(store.controls().value(ModifierSlot::Temperature), "-40.0");
    }

    #[test]
    fn test_inverted_bounds_still_encode() {
        let mut store = store();
        store
            .on_input(ModifierSlot::LowerBound, InputValue::Raw("80"))
            .expect("valid");
        store
            .on_input(ModifierSlot::UpperBound, InputValue::Raw("20"))
            .expect("valid");
        assert!(store.commit().as_str().ends_with(",80,20"));
    }

    #[test]
    fn test_nudge_and_restore() {
        let mut store = store();
        store.nudge(ModifierSlot::Cars, 3).expect("numeric");
        assert_eq!(store.controls().value(ModifierSlot::Cars), "1.3");
        assert!(store.nudge(ModifierSlot::DrawZeroValues, 1).is_err());

        let saved = ParameterSnapshot {
            petrol_share: 50.0,
            ..Default::default()
        };
        store.restore(saved);
        assert_eq!(store.committed(), &saved);
        assert_eq!(store.controls().label(LabelId::Diesel).as_deref(), Some("50.0%"));
    }

    #[test]
    fn test_restore_holds_saved_values_to_their_domains() {
        let mut store = store();
        let mut saved = ParameterSnapshot {
            temperature: -300.0,
            petrol_share: 12.345,
            upper_bound: f64::NAN,
            ..Default::default()
        };
        saved.multipliers[1] = 50.0;
        store.restore(saved);

        assert_eq!(store.committed().multipliers[1], 10.0);
        assert_eq!(store.committed().temperature, -40.0);
        assert_eq!(store.committed().upper_bound, 100.0);
        assert!(!store.is_dirty());
        assert_eq!(store.controls().value(ModifierSlot::Cars), "10");
        assert_eq!(store.encoded().as_str(), "1,10,1,1,1,12.3,-40,true,0,100");
    }
}
