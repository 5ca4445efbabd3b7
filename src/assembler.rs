use serde_json::Value;

use crate::descriptor::{Descriptor, Operand};
use crate::error::{AsmError, AsmResult};
use crate::ir::IrInstruction;

/// Lowers source records into IR using the fixed instruction table.
/// Stateless; one value can serve any number of runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler;

impl Assembler {
    pub fn new() -> Self {
        Self
    }

    /// All-or-nothing: the first bad record aborts the run and nothing is
    /// returned for the records before it.
    pub fn assemble(&self, program: &[Value]) -> AsmResult<Vec<IrInstruction>> {
        program
            .iter()
            .enumerate()
            .map(|(index, node)| self.lower(Descriptor::from_value(index, node)?))
            .collect()
    }

    pub fn lower(&self, d: Descriptor) -> AsmResult<IrInstruction> {
        let operand = match d.operand {
            Some(Operand { field, value }) => {
                if !field.contains(value) {
                    return Err(AsmError::OperandOutOfRange {
                        index: d.index,
                        param: field.name,
                        value,
                        min: 0,
                        max: field.max(),
                    });
                }
                Some(value as u64)
            }
            None => None,
        };
        Ok(IrInstruction::new(d.mnemonic, operand))
    }
}
