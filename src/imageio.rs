// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading and writing image files.
//!
//! Whatever comes in is normalized to 8-bit RGB: greyscale is spread
//! across all three channels and alpha is dropped.  The format on the
//! way out is chosen by the output path's extension.

use crate::errors::CarveError;
use image::{ImageBuffer, Pixel, RgbImage};
use log::info;
use std::path::Path;

/// Decode the image at `path` as RGB.
pub fn load_rgb<Q: AsRef<Path>>(path: Q) -> Result<RgbImage, CarveError> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|e| CarveError::Input {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let rgb = image.to_rgb();
    info!("read {} ({}x{})", path.display(), rgb.width(), rgb.height());
    Ok(rgb)
}

/// Encode an 8-bit image to `path`.
pub fn save<P, Q>(image: &ImageBuffer<P, Vec<u8>>, path: Q) -> Result<(), CarveError>
where
    P: Pixel<Subpixel = u8> + 'static,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    image.save(path).map_err(|e| CarveError::Encode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    info!("wrote {} ({}x{})", path.display(), image.width(), image.height());
    Ok(())
}
