//! Encoding - Modifier Wire Format
//!
//! The server receives a snapshot as a single path segment: the ten slots in
//! wire order, joined by commas. Numbers use their shortest plain decimal form
//! (`1`, `65.1`, `-3.5`) and the flag is the literal `true` or `false`.

use crate::constants::{MODIFIER_COUNT, MODIFIER_SEPARATOR};
use crate::domain::modifiers::{ModifierSlot, ModifierValue, ParameterSnapshot};
use crate::error::{Error, Result};

/// Encoded modifier string, ready to be placed in a URL path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedParams(String);

impl EncodedParams {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EncodedParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedParams {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Format a number the way the wire expects it
pub fn format_wire_number(value: f64) -> String {
    // -0 would otherwise be sent as "-0"
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Encode a snapshot
pub fn encode(snapshot: &ParameterSnapshot) -> EncodedParams {
    let mut out = String::with_capacity(48);
    for (i, slot) in ModifierSlot::ALL.iter().enumerate() {
        if i > 0 {
            out.push(MODIFIER_SEPARATOR);
        }
        match snapshot.get(*slot) {
            ModifierValue::Number(n) => out.push_str(&format_wire_number(n)),
            ModifierValue::Flag(b) => out.push_str(if b { "true" } else { "false" }),
        }
    }
    EncodedParams(out)
}

/// Decode a modifier string back into a snapshot.
///
/// Accepts the flag in either case (`true`/`True`) since the server renders
/// booleans capitalised.
pub fn decode(input: &str) -> Result<ParameterSnapshot> {
    let fields: Vec<&str> = input.split(MODIFIER_SEPARATOR).collect();
    if fields.len() != MODIFIER_COUNT {
        return Err(Error::MalformedEncoding {
            message: format!("expected {MODIFIER_COUNT} fields, found {}", fields.len()),
        });
    }

    let mut snapshot = ParameterSnapshot::default();
    for (slot, raw) in ModifierSlot::ALL.iter().zip(fields) {
        let raw = raw.trim();
        let value = if slot.is_flag() {
            match raw {
                "true" | "True" => ModifierValue::Flag(true),
                "false" | "False" => ModifierValue::Flag(false),
                other => {
                    return Err(Error::MalformedEncoding {
                        message: format!("field '{slot}' is not a boolean: {other:?}"),
                    });
                }
            }
        } else {
            let n = raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| Error::MalformedEncoding {
                    message: format!("field '{slot}' is not a number: {raw:?}"),
                })?;
            ModifierValue::Number(n)
        };
        snapshot.set(*slot, value);
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_encoding() {
        let encoded = encode(&ParameterSnapshot::default());
        assert_eq!(encoded.as_str(), "1,1,1,1,1,65.1,10,true,0,100");
    }

    #[test]
    fn test_field_count_and_order() {
        let snapshot = ParameterSnapshot {
            multipliers: [0.5, 1.2, 3.0, 0.0, 10.0],
            petrol_share: 40.0,
            temperature: -12.5,
            draw_zero_values: false,
            lower_bound: 5.0,
            upper_bound: 95.0,
        };
        let encoded = encode(&snapshot);
        let fields: Vec<&str> = encoded.as_str().split(',').collect();
        assert_eq!(fields.len(), 10);
        assert_eq!(fields, ["0.5", "1.2", "3", "0", "10", "40", "-12.5", "false", "5", "95"]);
    }

    #[test]
    fn test_inverted_bounds_are_encoded_verbatim() {
        let snapshot = ParameterSnapshot {
            lower_bound: 80.0,
            upper_bound: 20.0,
            ..Default::default()
        };
        assert!(encode(&snapshot).as_str().ends_with(",80,20"));
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_wire_number(-0.0), "0");
        assert_eq!(format_wire_number(0.1), "0.1");
    }

    #[test]
    fn test_decode() {
        let snapshot = decode("2,1,1,1,0.5,50,-5,True,10,90").expect("decode");
        assert_eq!(snapshot.multipliers, [2.0, 1.0, 1.0, 1.0, 0.5]);
        assert_eq!(snapshot.petrol_share, 50.0);
        assert_eq!(snapshot.temperature, -5.0);
        assert!(snapshot.draw_zero_values);
        assert_eq!(snapshot.upper_bound, 90.0);
        assert_eq!(encode(&snapshot).as_str(), "2,1,1,1,0.5,50,-5,true,10,90");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode("1,1,1").is_err());
        assert!(decode("1,1,1,1,1,65.1,10,yes,0,100").is_err());
        assert!(decode("1,1,x,1,1,65.1,10,true,0,100").is_err());
        assert!(decode("1,1,1,1,1,NaN,10,true,0,100").is_err());
        assert!(decode("1,1,1,1,1,65.1,10,true,0,100,").is_err());
    }
}
