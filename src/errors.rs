// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong between reading an image and writing
//! the carved result.  The engine itself never recovers; these all
//! bubble up to the caller.

use failure::Fail;

#[derive(Debug, Fail)]
pub enum CarveError {
    /// The source image could not be opened or decoded.
    #[fail(display = "could not read image {}: {}", path, reason)]
    Input { path: String, reason: String },

    /// A width or height argument was not an integer we can use.
    #[fail(display = "invalid {} '{}': expected a positive integer", name, value)]
    Argument { name: String, value: String },

    /// A target dimension below one pixel.
    #[fail(
        display = "target size {}x{} is degenerate: width and height must both be at least 1",
        width, height
    )]
    DegenerateTarget { width: i64, height: i64 },

    /// The source grid has nothing in it to carve.
    #[fail(display = "cannot carve an empty {}x{} image", width, height)]
    EmptyImage { width: u32, height: u32 },

    /// The carved image could not be written.
    #[fail(display = "could not write image {}: {}", path, reason)]
    Encode { path: String, reason: String },
}
