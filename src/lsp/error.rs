//! Non-compliant shapes: `Square` "inherits" `Rectangle` and overrides its setters.
//!
//! Rust has no class inheritance, so `RectangleShape` plays the base class:
//! the default methods are the inherited behavior, `base`/`base_mut` expose
//! the inherited fields, and an implementor overrides methods like a subclass.

use super::{describe, grow_width};
use crate::config::DemoConfig;
use crate::console::Console;
use crate::error::PrincipleError;
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }
}

pub trait RectangleShape {
    fn base(&self) -> &Rectangle;
    fn base_mut(&mut self) -> &mut Rectangle;

    fn length(&self) -> f64 {
        self.base().length
    }

    fn width(&self) -> f64 {
        self.base().width
    }

    fn set_length(&mut self, length: f64) {
        self.base_mut().length = length;
    }

    fn set_width(&mut self, width: f64) {
        self.base_mut().width = width;
    }
}

impl RectangleShape for Rectangle {
    fn base(&self) -> &Rectangle {
        self
    }

    fn base_mut(&mut self) -> &mut Rectangle {
        self
    }
}

/// A rectangle whose setters keep both sides equal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Square {
    base: Rectangle,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self {
            base: Rectangle::new(side, side),
        }
    }
}

impl Deref for Square {
    type Target = Rectangle;

    fn deref(&self) -> &Rectangle {
        &self.base
    }
}

impl DerefMut for Square {
    fn deref_mut(&mut self) -> &mut Rectangle {
        &mut self.base
    }
}

impl RectangleShape for Square {
    fn base(&self) -> &Rectangle {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Rectangle {
        &mut self.base
    }

    fn set_length(&mut self, length: f64) {
        self.base.set_length(length);
        self.base.set_width(length);
    }

    fn set_width(&mut self, width: f64) {
        self.base.set_length(width);
        self.base.set_width(width);
    }
}

/// Widens a rectangle until it is wider than it is long.
///
/// Never returns for a `Square`: every `set_width` also moves the length.
pub fn resize<R: RectangleShape + ?Sized>(rect: Option<&mut R>) {
    if let Some(rect) = rect {
        // Unlimited runs can only come back as Ok.
        let _ = grow(rect, None);
    }
}

/// Same loop as [`resize`], stopping after `max_iterations` increments.
pub fn resize_within<R: RectangleShape + ?Sized>(
    rect: Option<&mut R>,
    max_iterations: u64,
) -> Result<u64, PrincipleError> {
    rect.map_or(Ok(0), |rect| grow(rect, Some(max_iterations)))
}

fn grow<R: RectangleShape + ?Sized>(rect: &mut R, limit: Option<u64>) -> Result<u64, PrincipleError> {
    grow_width(
        rect,
        |r| (r.length(), r.width()),
        |r, width| r.set_width(width),
        limit,
    )
}

pub fn print_length_and_width(rect: Option<&dyn RectangleShape>, console: &dyn Console) {
    if let Some(rect) = rect {
        console.print(&describe(rect.length(), rect.width()));
    }
}

/// Resizes a rectangle, then a square passed where a rectangle is expected.
///
/// With `lsp.unbounded` set this reproduces the original hang.
pub fn demo(console: &dyn Console, config: &DemoConfig) -> Result<u64, PrincipleError> {
    let mut rectangle = Rectangle::default();
    rectangle.set_length(20.0);
    rectangle.set_width(10.0);

    resize(Some(&mut rectangle));
    print_length_and_width(Some(&rectangle), console);

    console.separator(&config.output.separator);

    let mut square = Square::default();
    square.set_length(10.0);

    if config.lsp.unbounded {
        resize(Some(&mut square));
        print_length_and_width(Some(&square), console);
        return Ok(0);
    }

    let outcome = resize_within(Some(&mut square), config.lsp.max_resize_iterations);
    if let Err(err) = &outcome {
        console.print(&format!("Contract violated: {err}"));
    }
    print_length_and_width(Some(&square), console);
    outcome
}
