//! Liskov Substitution, sibling shapes
//!
//! Run with: cargo run --bin lsp_correct

use design_principles::{lsp, logging, DemoConfig, PrincipleError, StdoutConsole};

fn main() -> Result<(), PrincipleError> {
    logging::init();
    let config = DemoConfig::load()?;

    lsp::correct::demo(&StdoutConsole, &config);
    Ok(())
}
