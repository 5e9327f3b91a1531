//! Liskov Substitution: rectangles, squares and the resize contract.
//!
//! Resize grows `width` by one while `width <= length`. A rectangle ends with
//! `width > length`; any shape whose width setter also moves the length can
//! never get there.

pub mod correct;
pub mod error;

use crate::error::PrincipleError;

/// Shared capability of four-sided shapes.
pub trait Quadrilateral {
    fn length(&self) -> f64;
    fn width(&self) -> f64;
    fn set_length(&mut self, length: f64);
    fn set_width(&mut self, width: f64);
}

/// Runs the resize loop on any quadrilateral, giving up after `max_iterations` increments.
///
/// Returns the number of increments performed. `None` is a no-op.
pub fn resize_within<Q>(shape: Option<&mut Q>, max_iterations: u64) -> Result<u64, PrincipleError>
where
    Q: Quadrilateral + ?Sized,
{
    shape.map_or(Ok(0), |shape| {
        grow_width(
            shape,
            |s| (s.length(), s.width()),
            |s, width| s.set_width(width),
            Some(max_iterations),
        )
    })
}

/// The resize loop every variant runs: widen by one while `width <= length`.
///
/// `sides` reads `(length, width)`. Without a `limit` the loop only returns
/// once the shape is wider than long, which a square never is.
pub(crate) fn grow_width<S: ?Sized>(
    shape: &mut S,
    sides: impl Fn(&S) -> (f64, f64),
    set_width: impl Fn(&mut S, f64),
    limit: Option<u64>,
) -> Result<u64, PrincipleError> {
    let mut iterations = 0;
    let (mut length, mut width) = sides(shape);

    while width <= length {
        if limit == Some(iterations) {
            tracing::warn!(iterations, length, width, "resize did not terminate");
            return Err(PrincipleError::ContractViolated {
                iterations,
                length,
                width,
            });
        }
        set_width(shape, width + 1.0);
        iterations += 1;
        (length, width) = sides(shape);
        tracing::trace!(iterations, width, "resize step");
    }
    Ok(iterations)
}

/// Formats the line both print helpers emit.
pub(crate) fn describe(length: f64, width: f64) -> String {
    format!("Length: {length:?}, width: {width:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lsp::correct::{Rectangle, Square};

    #[test]
    fn bounded_resize_on_rectangle() {
        let mut rect = Rectangle::new(20.0, 10.0);
        let steps = resize_within(Some(&mut rect), 1000).unwrap();
        assert_eq!(steps, 11);
        assert_eq!(rect.width(), 21.0);
        assert!(rect.width() > rect.length());
    }

    #[test]
    fn bounded_resize_on_trait_object() {
        let mut rect = Rectangle::new(3.0, 3.0);
        let shape: &mut dyn Quadrilateral = &mut rect;
        assert_eq!(resize_within(Some(shape), 10).unwrap(), 1);
        assert_eq!(rect.width(), 4.0);
    }

    #[test]
    fn bounded_resize_none_is_noop() {
        assert_eq!(resize_within::<Rectangle>(None, 5).unwrap(), 0);
    }

    #[test]
    fn already_wider_needs_no_steps() {
        let mut rect = Rectangle::new(5.0, 8.0);
        assert_eq!(resize_within(Some(&mut rect), 1).unwrap(), 0);
        assert_eq!(rect.width(), 8.0);
    }

    #[test]
    fn one_field_square_never_gets_wider() {
        let mut square = Square::new(10.0);
        let err = resize_within(Some(&mut square), 1000).unwrap_err();
        match err {
            PrincipleError::ContractViolated { iterations, length, width } => {
                assert_eq!(iterations, 1000);
                assert_eq!(length, 1010.0);
                assert_eq!(width, 1010.0);
            }
            other => panic!("Expected ContractViolated, got {other:?}"),
        }
    }

    #[test]
    fn grow_width_without_limit_stops_when_wider() {
        let mut sides = (3.0_f64, 1.5_f64);
        let steps = grow_width(&mut sides, |s| *s, |s, width| s.1 = width, None).unwrap();
        assert_eq!(steps, 2);
        assert_eq!(sides, (3.0, 3.5));
    }

    #[test]
    fn grow_width_limit_of_zero_fails_before_any_step() {
        let mut sides = (1.0_f64, 1.0_f64);
        let err = grow_width(&mut sides, |s| *s, |s, width| s.1 = width, Some(0)).unwrap_err();
        assert!(err.is_contract_violation());
        assert_eq!(sides, (1.0, 1.0));
    }

    #[test]
    fn describe_keeps_decimal_point() {
        assert_eq!(describe(20.0, 21.0), "Length: 20.0, width: 21.0");
        assert_eq!(describe(0.0, 0.0), "Length: 0.0, width: 0.0");
    }
}
