//! Open/Closed: the input method is closed for modification, open for new skins.

use crate::config::DemoConfig;
use crate::console::Console;

pub trait Skin {
    fn name(&self) -> &str;
    fn display(&self, console: &dyn Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSkin;

impl Skin for DefaultSkin {
    fn name(&self) -> &str {
        "default"
    }

    fn display(&self, console: &dyn Console) {
        console.print("Default skin");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HeimaSkin;

impl Skin for HeimaSkin {
    fn name(&self) -> &str {
        "heima"
    }

    fn display(&self, console: &dyn Console) {
        console.print("Heima skin");
    }
}

#[derive(Default)]
pub struct SougouInput {
    skin: Option<Box<dyn Skin>>,
}

impl SougouInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_skin(&mut self, skin: Box<dyn Skin>) {
        tracing::debug!(skin = skin.name(), "switching skin");
        self.skin = Some(skin);
    }

    pub fn skin(&self) -> Option<&dyn Skin> {
        self.skin.as_deref()
    }

    /// Returns `false` when no skin is installed.
    pub fn display(&self, console: &dyn Console) -> bool {
        match &self.skin {
            Some(skin) => {
                skin.display(console);
                true
            }
            None => false,
        }
    }
}

pub fn demo(console: &dyn Console, config: &DemoConfig) {
    let mut input = SougouInput::new();
    input.display(console);

    input.set_skin(Box::new(DefaultSkin));
    input.display(console);

    console.separator(&config.output.separator);

    input.set_skin(Box::new(HeimaSkin));
    input.display(console);
}
