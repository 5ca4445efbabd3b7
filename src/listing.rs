use crate::ir::IrInstruction;

pub fn fmt_ir(index: usize, ir: &IrInstruction) -> String {
    format!("{index:03}: {ir}")
}

/// Debug listing, one line per instruction under an `IR:` header.
pub fn render_listing(ir: &[IrInstruction]) -> String {
    let mut out = String::from("IR:\n");
    for (i, insn) in ir.iter().enumerate() {
        out.push_str(&fmt_ir(i, insn));
        out.push('\n');
    }
    out
}
