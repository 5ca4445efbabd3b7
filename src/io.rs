use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::ir::IrInstruction;

#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub pretty: bool, // two-space indented JSON
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

pub fn parse_program(text: &str) -> Result<Vec<Value>> {
    let doc: Value = serde_json::from_str(text).context("source program is not valid JSON")?;
    let Value::Array(items) = doc else {
        anyhow::bail!("source program must be a JSON list of objects");
    };
    Ok(items)
}

pub fn load_program(path: &Path) -> Result<Vec<Value>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let items = parse_program(&text).with_context(|| format!("in {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = items.len(), "loaded source program");
    Ok(items)
}

pub fn ir_to_json(ir: &[IrInstruction], cfg: &OutputConfig) -> serde_json::Result<String> {
    let mut out = if cfg.pretty { serde_json::to_string_pretty(ir)? } else { serde_json::to_string(ir)? };
    out.push('\n');
    Ok(out)
}

pub fn save_ir(path: &Path, ir: &[IrInstruction], cfg: &OutputConfig) -> Result<()> {
    let json = ir_to_json(ir, cfg)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = ir.len(), "wrote IR");
    Ok(())
}
