//! Compliant shapes: `Rectangle` and `Square` are siblings, not parent and child.

use super::{describe, grow_width, Quadrilateral};
use crate::config::DemoConfig;
use crate::console::Console;

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

impl Quadrilateral for Rectangle {
    fn length(&self) -> f64 {
        self.length
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    fn set_width(&mut self, width: f64) {
        self.width = width;
    }
}

/// Both accessors read the single `side`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Quadrilateral for Square {
    fn length(&self) -> f64 {
        self.side
    }

    fn width(&self) -> f64 {
        self.side
    }

    fn set_length(&mut self, length: f64) {
        self.side = length;
    }

    fn set_width(&mut self, width: f64) {
        self.side = width;
    }
}

/// Widens a rectangle until it is wider than it is long.
///
/// Only `Rectangle` is accepted: a `Square` does not compile here.
pub fn resize(rect: Option<&mut Rectangle>) {
    if let Some(rect) = rect {
        // A rectangle always ends wider, so no limit is needed.
        let _ = grow_width(rect, |r| (r.length, r.width), |r, width| r.width = width, None);
    }
}

pub fn print_length_and_width(shape: Option<&dyn Quadrilateral>, console: &dyn Console) {
    match shape {
        Some(shape) => console.print(&describe(shape.length(), shape.width())),
        None => console.print("Length: 0, width: 0"),
    }
}

pub fn demo(console: &dyn Console, config: &DemoConfig) {
    let mut rectangle = Rectangle::default();
    rectangle.set_length(20.0);
    rectangle.set_width(10.0);

    resize(Some(&mut rectangle));
    print_length_and_width(Some(&rectangle), console);

    console.separator(&config.output.separator);

    let mut square = Square::default();
    square.set_length(10.0);

    // resize(Some(&mut square)) is rejected by the type checker.
    print_length_and_width(Some(&square), console);
}
