//! Dependency Inversion, hard-wired parts
//!
//! Run with: cargo run --bin dip_error

use design_principles::{dip, logging, DemoConfig, PrincipleError, StdoutConsole};

fn main() -> Result<(), PrincipleError> {
    logging::init();
    let config = DemoConfig::load()?;

    dip::error::demo(&StdoutConsole, &config);
    Ok(())
}
