//! Modifiers - Vehicle Mix and Environment Parameters
//!
//! A snapshot is the fixed ten-slot record the server applies to the network
//! before computing emissions: five vehicle-type multipliers, the petrol share
//! of the engine split, the ambient temperature, whether zero values are drawn,
//! and the lower/upper display bounds.

/// One slot of the modifier snapshot, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModifierSlot {
    TwoWheelers,
    Cars,
    Buses,
    LightGoods,
    HeavyGoods,
    PetrolShare,
    Temperature,
    DrawZeroValues,
    LowerBound,
    UpperBound,
}

impl ModifierSlot {
    /// All slots in wire order
    pub const ALL: [ModifierSlot; 10] = [
        ModifierSlot::TwoWheelers,
        ModifierSlot::Cars,
        ModifierSlot::Buses,
        ModifierSlot::LightGoods,
        ModifierSlot::HeavyGoods,
        ModifierSlot::PetrolShare,
        ModifierSlot::Temperature,
        ModifierSlot::DrawZeroValues,
        ModifierSlot::LowerBound,
        ModifierSlot::UpperBound,
    ];

    /// The five vehicle-type multiplier slots
    pub const MULTIPLIERS: [ModifierSlot; 5] = [
        ModifierSlot::TwoWheelers,
        ModifierSlot::Cars,
        ModifierSlot::Buses,
        ModifierSlot::LightGoods,
        ModifierSlot::HeavyGoods,
    ];

    /// Position in the encoded string
    pub fn index(self) -> usize {
        self as usize
    }

    /// Control name used by the server's edit form
    pub fn control_name(self) -> &'static str {
        match self {
            ModifierSlot::TwoWheelers => "two",
            ModifierSlot::Cars => "cars",
            ModifierSlot::Buses => "buses",
            ModifierSlot::LightGoods => "lgvs",
            ModifierSlot::HeavyGoods => "hgvs",
            ModifierSlot::PetrolShare => "petrol",
            ModifierSlot::Temperature => "temp",
            ModifierSlot::DrawZeroValues => "draw",
            ModifierSlot::LowerBound => "lower",
            ModifierSlot::UpperBound => "upper",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            ModifierSlot::TwoWheelers => "Mopeds/Motorcycles",
            ModifierSlot::Cars => "Passenger Cars/Taxis",
            ModifierSlot::Buses => "Buses/coaches",
            ModifierSlot::LightGoods => "LGVs",
            ModifierSlot::HeavyGoods => "HGVs",
            ModifierSlot::PetrolShare => "Petrol",
            ModifierSlot::Temperature => "Temperature (°C)",
            ModifierSlot::DrawZeroValues => "Draw Zero Values",
            ModifierSlot::LowerBound => "Value Lower Boundary (%)",
            ModifierSlot::UpperBound => "Value Upper Boundary (%)",
        }
    }

    pub fn is_multiplier(self) -> bool {
        self.index() < 5
    }

    pub fn is_flag(self) -> bool {
        self == ModifierSlot::DrawZeroValues
    }

    /// Valid range of a numeric slot (`None` for the flag)
    pub fn domain(self) -> Option<SlotDomain> {
        match self {
            ModifierSlot::TwoWheelers
            | ModifierSlot::Cars
            | ModifierSlot::Buses
            | ModifierSlot::LightGoods
            | ModifierSlot::HeavyGoods => Some(SlotDomain::new(0.0, 10.0, 0.1)),
            ModifierSlot::PetrolShare => Some(SlotDomain::new(0.0, 100.0, 0.1)),
            ModifierSlot::Temperature => Some(SlotDomain::new(-40.0, 40.0, 1.0)),
            ModifierSlot::DrawZeroValues => None,
            ModifierSlot::LowerBound | ModifierSlot::UpperBound => {
                Some(SlotDomain::new(0.0, 100.0, 1.0))
            }
        }
    }
}

impl std::fmt::Display for ModifierSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.control_name())
    }
}

/// Inclusive numeric range and input step of a slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SlotDomain {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Decimal places implied by the step
    pub fn decimals(&self) -> i32 {
        if self.step < 1.0 { 1 } else { 0 }
    }

    /// Move `value` by whole steps, rounded to the step's precision and clamped
    pub fn nudge(&self, value: f64, steps: i32) -> f64 {
        let scale = 10f64.powi(self.decimals());
        let moved = value + self.step * f64::from(steps);
        self.clamp((moved * scale).round() / scale)
    }
}

/// Value held by a single slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModifierValue {
    Number(f64),
    Flag(bool),
}

impl ModifierValue {
    pub fn as_number(self) -> Option<f64> {
        match self {
            ModifierValue::Number(n) => Some(n),
            ModifierValue::Flag(_) => None,
        }
    }
}

/// Ten-slot modifier record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSnapshot {
    /// Two-wheelers, cars, buses, light goods, heavy goods
    pub multipliers: [f64; 5],
    /// Petrol share of the engine split, in percent
    pub petrol_share: f64,
    /// Ambient temperature in °C
    pub temperature: f64,
    pub draw_zero_values: bool,
    /// Lower display bound, in percent of the maximum value
    pub lower_bound: f64,
    /// Upper display bound, in percent of the maximum value
    pub upper_bound: f64,
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        Self {
            multipliers: [1.0; 5],
            petrol_share: 65.1,
            temperature: 10.0,
            draw_zero_values: true,
            lower_bound: 0.0,
            upper_bound: 100.0,
        }
    }
}

impl ParameterSnapshot {
    pub fn get(&self, slot: ModifierSlot) -> ModifierValue {
        match slot {
            ModifierSlot::TwoWheelers
            | ModifierSlot::Cars
            | ModifierSlot::Buses
            | ModifierSlot::LightGoods
            | ModifierSlot::HeavyGoods => ModifierValue::Number(self.multipliers[slot.index()]),
            ModifierSlot::PetrolShare => ModifierValue::Number(self.petrol_share),
            ModifierSlot::Temperature => ModifierValue::Number(self.temperature),
            ModifierSlot::DrawZeroValues => ModifierValue::Flag(self.draw_zero_values),
            ModifierSlot::LowerBound => ModifierValue::Number(self.lower_bound),
            ModifierSlot::UpperBound => ModifierValue::Number(self.upper_bound),
        }
    }

    /// Store a value into a slot. Returns false when the value kind does not
    /// match the slot (a flag for a numeric slot or vice versa).
    pub fn set(&mut self, slot: ModifierSlot, value: ModifierValue) -> bool {
        match (slot, value) {
            (ModifierSlot::DrawZeroValues, ModifierValue::Flag(b)) => {
                self.draw_zero_values = b;
                true
            }
            (ModifierSlot::DrawZeroValues, ModifierValue::Number(_)) => false,
            (_, ModifierValue::Flag(_)) => false,
            (slot, ModifierValue::Number(n)) => {
                match slot {
                    ModifierSlot::PetrolShare => self.petrol_share = n,
                    ModifierSlot::Temperature => self.temperature = n,
                    ModifierSlot::LowerBound => self.lower_bound = n,
                    ModifierSlot::UpperBound => self.upper_bound = n,
                    multiplier => self.multipliers[multiplier.index()] = n,
                }
                true
            }
        }
    }

    /// Diesel share, always derived from the petrol share
    pub fn diesel_share(&self) -> f64 {
        100.0 - self.petrol_share
    }

    /// Lower display bound above the upper one. The server swaps such a pair
    /// when the edit form is posted; the client only reports it.
    pub fn bounds_inverted(&self) -> bool {
        self.lower_bound > self.upper_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_indices_follow_wire_order() {
        for (i, slot) in ModifierSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_default_snapshot() {
        let snapshot = ParameterSnapshot::default();
        assert_eq!(snapshot.multipliers, [1.0; 5]);
        assert_eq!(snapshot.petrol_share, 65.1);
        assert_eq!(snapshot.temperature, 10.0);
        assert!(snapshot.draw_zero_values);
        assert_eq!(snapshot.lower_bound, 0.0);
        assert_eq!(snapshot.upper_bound, 100.0);
        assert!((snapshot.diesel_share() - 34.9).abs() < 1e-9);
    }

    #[test]
    fn test_set_rejects_mismatched_kind() {
        let mut snapshot = ParameterSnapshot::default();
        assert!(!snapshot.set(ModifierSlot::DrawZeroValues, ModifierValue::Number(1.0)));
        assert!(!snapshot.set(ModifierSlot::Cars, ModifierValue::Flag(false)));
        assert!(snapshot.set(ModifierSlot::Buses, ModifierValue::Number(2.5)));
        assert_eq!(snapshot.get(ModifierSlot::Buses), ModifierValue::Number(2.5));
        assert_eq!(snapshot.multipliers[2], 2.5);
    }

    #[test]
    fn test_domains() {
        let multiplier = ModifierSlot::Cars.domain().expect("numeric");
        assert_eq!(multiplier.clamp(10.1), 10.0);
        assert_eq!(multiplier.decimals(), 1);
        assert_eq!(ModifierSlot::Temperature.domain().map(|d| d.clamp(-55.0)), Some(-40.0));
        assert!(ModifierSlot::DrawZeroValues.domain().is_none());
    }

    #[test]
    fn test_nudge_stays_on_step_grid() {
        let multiplier = ModifierSlot::HeavyGoods.domain().expect("numeric");
        assert_eq!(multiplier.nudge(1.0, 1), 1.1);
        assert_eq!(multiplier.nudge(1.1, 1).to_string(), "1.2");
        assert_eq!(multiplier.nudge(0.0, -1), 0.0);
        assert_eq!(multiplier.nudge(9.95, 3), 10.0);
        let temperature = ModifierSlot::Temperature.domain().expect("numeric");
        assert_eq!(temperature.nudge(10.0, -5), 5.0);
    }

    #[test]
    fn test_bounds_inverted_is_reported() {
        let snapshot = ParameterSnapshot {
            lower_bound: 80.0,
            upper_bound: 20.0,
            ..Default::default()
        };
        assert!(snapshot.bounds_inverted());
        assert!(!ParameterSnapshot::default().bounds_inverted());
    }
}
