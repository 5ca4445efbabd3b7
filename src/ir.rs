use serde::Serialize;
use std::fmt;

use crate::instructions::Mnemonic;

/// One lowered instruction. Built only by the assembler; serializes as
/// `{"mnemonic", "A", "B"?}` with `B` left out entirely when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IrInstruction {
    mnemonic: Mnemonic,
    #[serde(rename = "A")]
    opcode: u32,
    #[serde(rename = "B", skip_serializing_if = "Option::is_none")]
    operand: Option<u64>,
}

impl IrInstruction {
    pub(crate) fn new(mnemonic: Mnemonic, operand: Option<u64>) -> Self {
        Self { mnemonic, opcode: mnemonic.opcode(), operand }
    }

    pub fn mnemonic(&self) -> Mnemonic {
        self.mnemonic
    }

    pub fn opcode(&self) -> u32 {
        self.opcode
    }

    pub fn operand(&self) -> Option<u64> {
        self.operand
    }

    /// `A=26, B=5` or `A=40`.
    pub fn fields(&self) -> String {
        match self.operand {
            Some(b) => format!("A={}, B={}", self.opcode, b),
            None => format!("A={}", self.opcode),
        }
    }
}

impl fmt::Display for IrInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.mnemonic, self.fields())
    }
}
