// Copyright 2021 uvrect Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use thiserror::Error;

/// Failure conditions for rectangle construction and UV mapping
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RectError {
    #[error("'{0}' is not a finite number")]
    NotFinite(&'static str),
    #[error("'{0}' is negative")]
    NegativeExtent(&'static str),
    #[error("container rectangle has zero width or height")]
    DegenerateContainer,
}

pub type Result<T> = std::result::Result<T, RectError>;
