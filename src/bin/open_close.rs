//! Open/Closed, swappable skins
//!
//! Run with: cargo run --bin open_close

use design_principles::{logging, ocp, DemoConfig, PrincipleError, StdoutConsole};

fn main() -> Result<(), PrincipleError> {
    logging::init();
    let config = DemoConfig::load()?;

    ocp::demo(&StdoutConsole, &config);
    Ok(())
}
