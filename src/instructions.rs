use serde::Serialize;
use std::fmt;

/// Layout of the optional second field (B) of an instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandField {
    /// Key the value is read from in a source record.
    pub name: &'static str,
    /// Width of field B in bits.
    pub bits: u32,
}

impl OperandField {
    /// Largest value that fits, i.e. `2^bits - 1`.
    pub const fn max(self) -> u64 {
        if self.bits >= 64 { u64::MAX } else { (1u64 << self.bits) - 1 }
    }

    pub fn contains(self, value: i128) -> bool {
        value >= 0 && value <= self.max() as i128
    }
}

/// Every instruction kind the assembler knows. Opcodes are fixed here and
/// never taken from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mnemonic {
    LoadConst,
    LoadMem,
    StoreMem,
    Abs,
}

impl Mnemonic {
    pub const ALL: &'static [Mnemonic] = &[
        Mnemonic::LoadConst,
        Mnemonic::LoadMem,
        Mnemonic::StoreMem,
        Mnemonic::Abs,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Mnemonic::LoadConst => "LOAD_CONST",
            Mnemonic::LoadMem => "LOAD_MEM",
            Mnemonic::StoreMem => "STORE_MEM",
            Mnemonic::Abs => "ABS",
        }
    }

    /// Field A.
    pub const fn opcode(self) -> u32 {
        match self {
            Mnemonic::LoadConst => 26,
            Mnemonic::LoadMem => 47,
            Mnemonic::StoreMem => 25,
            Mnemonic::Abs => 40,
        }
    }

    /// Field B layout, `None` for single-field instructions.
    pub const fn operand_field(self) -> Option<OperandField> {
        match self {
            Mnemonic::LoadConst => Some(OperandField { name: "value", bits: 27 }),
            Mnemonic::LoadMem => Some(OperandField { name: "offset", bits: 12 }),
            Mnemonic::StoreMem | Mnemonic::Abs => None,
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Mnemonic> {
        Self::ALL.iter().copied().find(|m| m.name() == name)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
