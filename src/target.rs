// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turn the width and height arguments into a usable target size.

use crate::errors::CarveError;
use std::convert::TryFrom;

fn parse_dimension(name: &str, value: &str) -> Result<i64, CarveError> {
    value.trim().parse::<i64>().map_err(|_| CarveError::Argument {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn narrow(name: &str, value: i64) -> Result<u32, CarveError> {
    u32::try_from(value).map_err(|_| CarveError::Argument {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Parse a target width and height.  Both must be integers, and both
/// must be at least 1; a target of zero or less is rejected here,
/// before any image is read.
pub fn parse_target(width: &str, height: &str) -> Result<(u32, u32), CarveError> {
    let (w, h) = (
        parse_dimension("width", width)?,
        parse_dimension("height", height)?,
    );
    if w < 1 || h < 1 {
        return Err(CarveError::DegenerateTarget {
            width: w,
            height: h,
        });
    }
    Ok((narrow("width", w)?, narrow("height", h)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers_parse() {
        assert_eq!(parse_target("640", " 480 ").unwrap(), (640, 480));
    }

    #[test]
    fn non_integer_is_an_argument_error() {
        match parse_target("wide", "10") {
            Err(CarveError::Argument { name, value }) => {
                assert_eq!(name, "width");
                assert_eq!(value, "wide");
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(parse_target("10", "1.5").is_err());
    }

    #[test]
    fn zero_and_negative_are_degenerate() {
        match parse_target("0", "-4") {
            Err(CarveError::DegenerateTarget { width, height }) => {
                assert_eq!((width, height), (0, -4));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn oversized_is_an_argument_error() {
        match parse_target("10", "99999999999") {
            Err(CarveError::Argument { name, .. }) => assert_eq!(name, "height"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
