//! Dependency Inversion, injected parts
//!
//! Run with: cargo run --bin dip_correct

use design_principles::{dip, logging, DemoConfig, PrincipleError, StdoutConsole};

fn main() -> Result<(), PrincipleError> {
    logging::init();
    let config = DemoConfig::load()?;

    dip::correct::demo(&StdoutConsole, &config);
    Ok(())
}
