// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cut a vertical seam out of an image, or double one up.
//!
//! Neither operation touches its input; each builds a fresh buffer one
//! column narrower or wider.  The seam must have one in-range column
//! per row.

use crate::cq;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

/// Every row loses the pixel at its seam column; everything to the
/// right of it slides one place left.
pub fn remove_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    debug_assert_eq!(seam.len(), height as usize);
    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        for x in (0..width).filter(|x| *x != cut) {
            imgbuf.put_pixel(cq!(x < cut, x, x - 1), y, image.get_pixel(x, y));
        }
    }
    imgbuf
}

/// Every row gets a second copy of the pixel at its seam column,
/// placed immediately to its right; everything after that slides one
/// place right.
pub fn insert_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    debug_assert_eq!(seam.len(), height as usize);
    let mut imgbuf = ImageBuffer::new(width + 1, height);
    for y in 0..height {
        let dup = seam[y as usize];
        for x in 0..width {
            let pixel = image.get_pixel(x, y);
            imgbuf.put_pixel(cq!(x <= dup, x, x + 1), y, pixel);
            if x == dup {
                imgbuf.put_pixel(x + 1, y, pixel);
            }
        }
    }
    imgbuf
}
