//! Liskov Substitution, a square that inherits from rectangle
//!
//! Run with: cargo run --bin lsp_error
//! Set `lsp.unbounded = true` in the config file to watch the original hang.

use design_principles::{logging, lsp, DemoConfig, PrincipleError, StdoutConsole};

fn main() -> Result<(), PrincipleError> {
    logging::init();
    let config = DemoConfig::load()?;

    match lsp::error::demo(&StdoutConsole, &config) {
        Ok(_) => Ok(()),
        // The violation is the point of the demonstration, already printed.
        Err(err) if err.is_contract_violation() => Ok(()),
        Err(err) => Err(err),
    }
}
