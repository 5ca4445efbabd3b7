pub mod assembler;
pub mod descriptor;
pub mod error;
pub mod instructions;
pub mod io;
pub mod ir;
pub mod listing;

pub use assembler::Assembler;
pub use error::{AsmError, AsmResult};
pub use instructions::{Mnemonic, OperandField};
pub use ir::IrInstruction;
