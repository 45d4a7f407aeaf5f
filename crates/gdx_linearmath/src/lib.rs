//! Bullet LinearMath constants
//!
//! The native physics layer exposes a handful of build-time constants
//! (version, the "large float" sentinel, common scalars). They are kept here
//! as a static table keyed by name. Nothing in this crate has behaviour
//! beyond looking values up.

use serde::Serialize;
use std::fmt;

pub const BT_BULLET_VERSION: i32 = 283;
/// Sentinel used by the physics layer for "effectively infinite"
pub const BT_LARGE_FLOAT: f64 = 1e18;
pub const BT_ONE: f64 = 1.0;
pub const BT_ZERO: f64 = 0.0;
pub const BT_TWO: f64 = 2.0;
pub const BT_HALF: f64 = 0.5;
/// Serialized struct name of a float `btVector3`
pub const BT_VECTOR3_DATA_NAME: &str = "btVector3FloatData";
// Spelling matches the native header.
pub const USE_BANCHLESS: i32 = 1;
pub const BT_USE_PLACEMENT_NEW: i32 = 1;

/// Value of a LinearMath constant
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConstantValue {
    Int(i32),
    Double(f64),
    Str(&'static str),
}

impl ConstantValue {
    /// Numeric value, widening integers; `None` for strings
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            ConstantValue::Int(v) => Some(f64::from(v)),
            ConstantValue::Double(v) => Some(v),
            ConstantValue::Str(_) => None,
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Int(v) => write!(f, "{}", v),
            ConstantValue::Double(v) => write!(f, "{:?}", v),
            ConstantValue::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// A named entry of the constant table
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinearMathConstant {
    pub name: &'static str,
    pub value: ConstantValue,
}

const fn entry(name: &'static str, value: ConstantValue) -> LinearMathConstant {
    LinearMathConstant { name, value }
}

const TABLE: &[LinearMathConstant] = &[
    entry("BT_BULLET_VERSION", ConstantValue::Int(BT_BULLET_VERSION)),
    entry("BT_LARGE_FLOAT", ConstantValue::Double(BT_LARGE_FLOAT)),
    entry("BT_ONE", ConstantValue::Double(BT_ONE)),
    entry("BT_ZERO", ConstantValue::Double(BT_ZERO)),
    entry("BT_TWO", ConstantValue::Double(BT_TWO)),
    entry("BT_HALF", ConstantValue::Double(BT_HALF)),
    entry(
        "btVector3DataName",
        ConstantValue::Str(BT_VECTOR3_DATA_NAME),
    ),
    entry("USE_BANCHLESS", ConstantValue::Int(USE_BANCHLESS)),
    entry(
        "BT_USE_PLACEMENT_NEW",
        ConstantValue::Int(BT_USE_PLACEMENT_NEW),
    ),
];

/// All constants in declaration order
pub fn constants() -> &'static [LinearMathConstant] {
    TABLE
}

/// Look up a constant by its exact (case-sensitive) name
pub fn lookup(name: &str) -> Option<ConstantValue> {
    TABLE.iter().find(|c| c.name == name).map(|c| c.value)
}

/// Look up a numeric constant; strings and unknown names give `None`
pub fn lookup_f64(name: &str) -> Option<f64> {
    lookup(name).and_then(|v| v.as_f64())
}
