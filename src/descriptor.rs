//! Boundary between loosely typed source records and the assembler core.
//!
//! A source record is any JSON value; [`Descriptor::from_value`] checks its
//! shape, resolves the mnemonic and pulls out the raw operand. Range checks
//! against the field width are left to the assembler.

use num_traits::ToPrimitive;
use serde_json::{Map, Number, Value};
use std::num::IntErrorKind;

use crate::error::{AsmError, AsmResult};
use crate::instructions::{Mnemonic, OperandField};

/// Key naming the operation in a source record.
pub const OP_KEY: &str = "op";

/// Raw value for field B together with the layout it must fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    pub field: OperandField,
    /// Not yet range-checked.
    pub value: i128,
}

/// A source record that passed shape checks. Only [`Descriptor::from_value`]
/// and [`Descriptor::from_record`] build one, so `operand` is present exactly
/// when the mnemonic declares field B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub(crate) index: usize,
    pub(crate) mnemonic: Mnemonic,
    pub(crate) operand: Option<Operand>,
}

impl Descriptor {
    pub fn from_value(index: usize, node: &Value) -> AsmResult<Self> {
        let Value::Object(record) = node else {
            return Err(AsmError::MalformedInstruction {
                index,
                reason: format!("expected a JSON object, found {}", kind_of(node)),
            });
        };
        Self::from_record(index, record)
    }

    pub fn from_record(index: usize, record: &Map<String, Value>) -> AsmResult<Self> {
        let op = record.get(OP_KEY).ok_or(AsmError::MissingOperation { index })?;
        let name = match op {
            Value::String(name) => name.clone(),
            // scalars can never name a mnemonic
            Value::Null | Value::Bool(_) | Value::Number(_) => op.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(AsmError::MalformedInstruction {
                    index,
                    reason: format!("'{OP_KEY}' must be a string, found {}", kind_of(op)),
                });
            }
        };
        let mnemonic = Mnemonic::from_name(&name).ok_or(AsmError::UnknownMnemonic { index, name })?;

        let operand = match mnemonic.operand_field() {
            None => None,
            Some(field) => {
                let raw = record.get(field.name).ok_or(AsmError::MissingOperand {
                    index,
                    mnemonic,
                    param: field.name,
                })?;
                let value = to_integer(raw).ok_or_else(|| AsmError::MalformedInstruction {
                    index,
                    reason: format!("'{}' is not an integer: {raw}", field.name),
                })?;
                Some(Operand { field, value })
            }
        };

        Ok(Descriptor { index, mnemonic, operand })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn mnemonic(&self) -> Mnemonic {
        self.mnemonic
    }

    pub fn operand(&self) -> Option<Operand> {
        self.operand
    }
}

/// Integer-like values: JSON integers, floats with no fractional part and
/// base-10 integer strings. Anything else is rejected rather than truncated.
/// Whole numbers beyond `i128` saturate; every field is far narrower, so they
/// still fail the range check.
pub fn to_integer(v: &Value) -> Option<i128> {
    match v {
        Value::Number(n) => number_to_integer(n),
        Value::String(s) => parse_integer(s),
        _ => None,
    }
}

fn number_to_integer(n: &Number) -> Option<i128> {
    if let Some(u) = n.as_u64() {
        return Some(u as i128);
    }
    if let Some(i) = n.as_i64() {
        return Some(i as i128);
    }
    let f = n.as_f64()?;
    if f.fract() != 0.0 {
        return None;
    }
    Some(f.to_i128().unwrap_or(if f > 0.0 { i128::MAX } else { i128::MIN }))
}

fn parse_integer(s: &str) -> Option<i128> {
    match s.trim().parse::<i128>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i128::MAX),
            IntErrorKind::NegOverflow => Some(i128::MIN),
            _ => None,
        },
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
