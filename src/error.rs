use crate::instructions::Mnemonic;

/// First problem found while lowering a program. `index` is the position of
/// the offending record in the source list.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("instruction #{index} is malformed: {reason}")]
    MalformedInstruction { index: usize, reason: String },
    #[error("instruction #{index} has no 'op' field")]
    MissingOperation { index: usize },
    #[error("unknown mnemonic '{name}' in instruction #{index}")]
    UnknownMnemonic { index: usize, name: String },
    #[error("instruction #{index} '{mnemonic}' requires argument '{param}'")]
    MissingOperand { index: usize, mnemonic: Mnemonic, param: &'static str },
    #[error("instruction #{index}: {param}={value} does not fit in field B ({min}..={max})")]
    OperandOutOfRange { index: usize, param: &'static str, value: i128, min: u64, max: u64 },
}

impl AsmError {
    pub fn index(&self) -> usize {
        match self {
            AsmError::MalformedInstruction { index, .. }
            | AsmError::MissingOperation { index }
            | AsmError::UnknownMnemonic { index, .. }
            | AsmError::MissingOperand { index, .. }
            | AsmError::OperandOutOfRange { index, .. } => *index,
        }
    }
}

pub type AsmResult<T> = Result<T, AsmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let e = AsmError::OperandOutOfRange { index: 3, param: "offset", value: 4096, min: 0, max: 4095 };
        assert_eq!(e.index(), 3);
        assert_eq!(e.to_string(), "instruction #3: offset=4096 does not fit in field B (0..=4095)");

        let e = AsmError::MissingOperand { index: 1, mnemonic: Mnemonic::LoadConst, param: "value" };
        assert_eq!(e.to_string(), "instruction #1 'LOAD_CONST' requires argument 'value'");

        let e = AsmError::UnknownMnemonic { index: 0, name: "JUMP".into() };
        assert!(e.to_string().contains("'JUMP'"));
    }
}
