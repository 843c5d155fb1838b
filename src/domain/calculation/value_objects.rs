use derive_more::{Constructor, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - one operand of a binary arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
pub struct Operand(f64);

impl Operand {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - the five operations the backend understands
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    /// Name used in the `/calculate` request body.
    pub fn as_wire_str(&self) -> &str {
        self.as_ref()
    }

    /// Glyph shown on the operation button.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }
}

/// Value Object - a calculation request whose operands already validated
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub a: Operand,
    pub b: Operand,
    pub operation: Operation,
}
