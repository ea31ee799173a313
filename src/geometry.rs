// Copyright 2021 uvrect Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Axis-aligned rectangles and their normalized UV coordinates

use crate::error::{RectError, Result};
use crate::Scalar;
use approx::{AbsDiffEq, RelativeEq};

/// A width/height extent pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size<P> {
    pub width: P,
    pub height: P,
}

/// An axis-aligned rectangle described by its origin and extent
///
/// Every coordinate is finite and the extent is never negative; both are
/// checked at construction and hold for the lifetime of the value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<P> {
    left: P,
    top: P,
    width: P,
    height: P,
}

fn finite<P: Scalar>(value: P, name: &'static str) -> Result<P> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RectError::NotFinite(name))
    }
}

impl<P: Scalar> Rect<P> {
    /// New Rect from an origin and extent
    pub fn from_xywh(left: P, top: P, width: P, height: P) -> Result<Rect<P>> {
        let left = finite(left, "left")?;
        let top = finite(top, "top")?;
        let width = finite(width, "width")?;
        let height = finite(height, "height")?;
        if width < P::zero() {
            return Err(RectError::NegativeExtent("width"));
        }
        if height < P::zero() {
            return Err(RectError::NegativeExtent("height"));
        }
        Ok(Rect {
            left,
            top,
            width,
            height,
        })
    }

    /// New Rect from two opposite corners
    pub fn from_bounds(left: P, top: P, right: P, bottom: P) -> Result<Rect<P>> {
        let left = finite(left, "left")?;
        let top = finite(top, "top")?;
        let right = finite(right, "right")?;
        let bottom = finite(bottom, "bottom")?;
        // corners carry no order, normalize before measuring the extent
        let (x0, x1) = (left.min(right), left.max(right));
        let (y0, y1) = (top.min(bottom), top.max(bottom));
        Rect::from_xywh(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn left(&self) -> P {
        self.left
    }

    pub fn top(&self) -> P {
        self.top
    }

    pub fn width(&self) -> P {
        self.width
    }

    pub fn height(&self) -> P {
        self.height
    }

    /// `left + width`
    pub fn right(&self) -> P {
        self.left + self.width
    }

    /// `top + height`
    pub fn bottom(&self) -> P {
        self.top + self.height
    }

    /// The rectangle's extent
    pub fn size(&self) -> Size<P> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Determine the area of the rectangle
    pub fn area(&self) -> P {
        self.width * self.height
    }

    /// A rectangle with zero width or height covers nothing
    pub fn is_empty(&self) -> bool {
        self.width == P::zero() || self.height == P::zero()
    }

    /// The same extent moved by an offset
    pub fn translate(&self, dx: P, dy: P) -> Result<Rect<P>> {
        Rect::from_xywh(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Position and extent scaled by a factor
    pub fn scale(&self, factor: P) -> Result<Rect<P>> {
        Rect::from_xywh(
            self.left * factor,
            self.top * factor,
            self.width * factor,
            self.height * factor,
        )
    }

    /// Extent scaled by a factor, origin untouched
    pub fn scale_size(&self, factor: P) -> Result<Rect<P>> {
        Rect::from_xywh(
            self.left,
            self.top,
            self.width * factor,
            self.height * factor,
        )
    }

    /// Grown by a padding on every side; a negative padding shrinks
    pub fn enlarge(&self, pad: P) -> Result<Rect<P>> {
        let two = P::one() + P::one();
        Rect::from_xywh(
            self.left - pad,
            self.top - pad,
            self.width + pad * two,
            self.height + pad * two,
        )
    }

    /// The receiver re-expressed in `container`'s normalized [0,1]x[0,1]
    /// coordinate space, as fractions of the container's extent
    ///
    /// The container must have a positive extent on both axes.
    pub fn as_uv_rect_inside(&self, container: &Rect<P>) -> Result<Rect<P>> {
        if container.is_empty() {
            return Err(RectError::DegenerateContainer);
        }
        Rect::from_xywh(
            (self.left - container.left) / container.width,
            (self.top - container.top) / container.height,
            self.width / container.width,
            self.height / container.height,
        )
    }
}

impl<P> AbsDiffEq for Size<P>
where
    P: Scalar + AbsDiffEq,
    P::Epsilon: Copy,
{
    type Epsilon = P::Epsilon;

    fn default_epsilon() -> P::Epsilon {
        P::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: P::Epsilon) -> bool {
        P::abs_diff_eq(&self.width, &other.width, epsilon)
            && P::abs_diff_eq(&self.height, &other.height, epsilon)
    }
}

impl<P> RelativeEq for Size<P>
where
    P: Scalar + RelativeEq,
    P::Epsilon: Copy,
{
    fn default_max_relative() -> P::Epsilon {
        P::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: P::Epsilon, max_relative: P::Epsilon) -> bool {
        P::relative_eq(&self.width, &other.width, epsilon, max_relative)
            && P::relative_eq(&self.height, &other.height, epsilon, max_relative)
    }
}

impl<P> AbsDiffEq for Rect<P>
where
    P: Scalar + AbsDiffEq,
    P::Epsilon: Copy,
{
    type Epsilon = P::Epsilon;

    fn default_epsilon() -> P::Epsilon {
        P::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: P::Epsilon) -> bool {
        P::abs_diff_eq(&self.left, &other.left, epsilon)
            && P::abs_diff_eq(&self.top, &other.top, epsilon)
            && P::abs_diff_eq(&self.width, &other.width, epsilon)
            && P::abs_diff_eq(&self.height, &other.height, epsilon)
    }
}

impl<P> RelativeEq for Rect<P>
where
    P: Scalar + RelativeEq,
    P::Epsilon: Copy,
{
    fn default_max_relative() -> P::Epsilon {
        P::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: P::Epsilon, max_relative: P::Epsilon) -> bool {
        P::relative_eq(&self.left, &other.left, epsilon, max_relative)
            && P::relative_eq(&self.top, &other.top, epsilon, max_relative)
            && P::relative_eq(&self.width, &other.width, epsilon, max_relative)
            && P::relative_eq(&self.height, &other.height, epsilon, max_relative)
    }
}
