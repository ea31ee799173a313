// Copyright 2021 uvrect Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod error;
pub mod geometry;

pub use crate::error::{RectError, Result};
pub use crate::geometry::{Rect, Size};

use num::Float;
use std::fmt::Debug;

/// Floating point scalar usable as a rectangle coordinate
pub trait Scalar: Float + Debug + Default {}

impl<P> Scalar for P where P: Float + Debug + Default {}
