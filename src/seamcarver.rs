// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The resize loop.  Width is settled completely first, one seam at a
//! time, removing seams to shrink and duplicating them to grow.  The
//! image is then flipped so that its height becomes the width, the
//! same loop runs against the target height, and the image is flipped
//! back.  Every pass recomputes the energy map from scratch.

use crate::cq;
use crate::energy::compute_energy;
use crate::errors::CarveError;
use crate::flipper::transpose;
use crate::seameditor::{insert_seam, remove_seam};
use crate::seamfinder::find_vertical_seam;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use log::{debug, info};
use std::fmt;

/// The axis currently being carved.  Height is carved as width on the
/// flipped image.
#[derive(Debug, PartialEq, Copy, Clone)]
enum Carve {
    Width,
    Height,
}

impl fmt::Display for Carve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Carve::Width => write!(f, "width"),
            Carve::Height => write!(f, "height"),
        }
    }
}

// Remove or duplicate a single seam.
fn carveonce<P, S>(image: &ImageBuffer<P, Vec<S>>, grow: bool) -> ImageBuffer<P, Vec<S>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let seam = find_vertical_seam(&compute_energy(image));
    if grow {
        insert_seam(image, &seam)
    } else {
        remove_seam(image, &seam)
    }
}

// Drive the image's width to `target`, which must be at least 1.
fn carve_axis<P, S>(
    mut scratch: ImageBuffer<P, Vec<S>>,
    target: u32,
    direction: Carve,
) -> ImageBuffer<P, Vec<S>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let start = scratch.width();
    while scratch.width() > target {
        scratch = carveonce(&scratch, false);
        debug!("{}: removed seam, now {}", direction, scratch.width());
    }
    while scratch.width() < target {
        scratch = carveonce(&scratch, true);
        debug!("{}: inserted seam, now {}", direction, scratch.width());
    }
    if start != target {
        let seams = cq!(start > target, start - target, target - start);
        info!("{}: {} -> {} ({} seams)", direction, start, target, seams);
    }
    scratch
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I: GenericImageView> {
    image: &'a I,
}

impl<'a, I, P, S> SeamCarver<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    /// Given a desired new width and height, repeatedly carve or
    /// duplicate seams until the image has exactly that size.  The
    /// source image is never modified.
    ///
    /// Both targets must be at least 1, and the source must not be
    /// empty.
    pub fn carve(
        &self,
        newwidth: u32,
        newheight: u32,
    ) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        if newwidth == 0 || newheight == 0 {
            return Err(CarveError::DegenerateTarget {
                width: i64::from(newwidth),
                height: i64::from(newheight),
            });
        }
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyImage { width, height });
        }

        // Initialize the scratch space.
        let scratch = ImageBuffer::from_fn(width, height, |x, y| self.image.get_pixel(x, y));

        let scratch = carve_axis(scratch, newwidth, Carve::Width);
        let flipped = carve_axis(transpose(&scratch), newheight, Carve::Height);
        Ok(transpose(&flipped))
    }
}

/// Resize `image` to exactly `width` x `height` by seam carving.
pub fn seamcarve<I, P, S>(
    image: &I,
    width: u32,
    height: u32,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    SeamCarver::new(image).carve(width, height)
}
