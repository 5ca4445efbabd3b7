use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use irasm::io::{load_program, save_ir, OutputConfig};
use irasm::listing::render_listing;
use irasm::{Assembler, IrInstruction};

#[derive(Parser, Debug)]
#[command(author, version, about = "Lower a JSON instruction list into IR", long_about = None)]
struct Cli {
    /// Source program: a JSON list of {"op": ..., <arg>: ...} records
    #[arg(value_name = "SOURCE")]
    source: PathBuf,
    /// Where to write the IR as JSON
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
    /// Print the IR listing to stdout
    #[arg(long)]
    test: bool,
    /// Write single-line JSON instead of indented JSON
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn output_config(&self) -> OutputConfig {
        OutputConfig { pretty: !self.compact }
    }
}

/// The listing goes to `listing` before the output file is written.
fn run<W: Write>(cli: &Cli, listing: &mut W) -> Result<Vec<IrInstruction>> {
    let program = load_program(&cli.source)?;
    let ir = Assembler::new().assemble(&program)?;
    tracing::info!(instructions = ir.len(), "assembled");
    if cli.test {
        listing.write_all(render_listing(&ir).as_bytes())?;
        listing.flush()?;
    }
    save_ir(&cli.output, &ir, &cli.output_config())?;
    Ok(ir)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run(&cli, &mut std::io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::current_dir().unwrap().join(name)
    }

    #[test]
    fn parses_positionals_and_flags() {
        let cli = Cli::try_parse_from(["irasm", "in.json", "out.json", "--test"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("in.json"));
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert!(cli.test);
        assert!(cli.output_config().pretty);

        let cli = Cli::try_parse_from(["irasm", "a", "b", "--compact"]).unwrap();
        assert!(!cli.test);
        assert!(!cli.output_config().pretty);

        assert!(Cli::try_parse_from(["irasm", "only-source"]).is_err());
    }

    #[test]
    fn run_writes_output() {
        let src = scratch("_cli_ok_src.json");
        let dst = scratch("_cli_ok_dst.json");
        std::fs::write(&src, r#"[{"op":"LOAD_CONST","value":5},{"op":"ABS"}]"#).unwrap();
        let cli = Cli { source: src.clone(), output: dst.clone(), test: false, compact: true };
        let ir = run(&cli, &mut Vec::new()).unwrap();
        assert_eq!(ir.len(), 2);
        let text = std::fs::read_to_string(&dst).unwrap();
        assert_eq!(text, "[{\"mnemonic\":\"LOAD_CONST\",\"A\":26,\"B\":5},{\"mnemonic\":\"ABS\",\"A\":40}]\n");
        let _ = std::fs::remove_file(&src);
        let _ = std::fs::remove_file(&dst);
    }

    #[test]
    fn failed_run_leaves_no_output() {
        let src = scratch("_cli_bad_src.json");
        let dst = scratch("_cli_bad_dst.json");
        let _ = std::fs::remove_file(&dst);
        std::fs::write(&src, r#"[{"op":"ABS"},{"op":"LOAD_MEM","offset":4096}]"#).unwrap();
        let cli = Cli { source: src.clone(), output: dst.clone(), test: false, compact: false };
        let err = run(&cli, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("offset=4096"));
        assert!(!dst.exists());
        let _ = std::fs::remove_file(&src);
    }

    #[test]
    fn listing_printed_before_save() {
        let src = scratch("_cli_listing_src.json");
        std::fs::write(&src, r#"[{"op":"LOAD_CONST","value":5},{"op":"ABS"}]"#).unwrap();
        // unwritable destination: the save fails after the listing is out
        let dst = scratch("_cli_no_such_dir").join("out.json");
        let cli = Cli { source: src.clone(), output: dst.clone(), test: true, compact: false };
        let mut out = Vec::new();
        assert!(run(&cli, &mut out).is_err());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "IR:\n000: LOAD_CONST: A=26, B=5\n001: ABS: A=40\n"
        );
        assert!(!dst.exists());
        let _ = std::fs::remove_file(&src);
    }
}
