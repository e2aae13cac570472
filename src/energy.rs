// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Each pixel is flattened to a single intensity, the plain mean of its
//! channels, and its energy is the forward difference to its right and
//! lower neighbors:
//!
//! ```text
//! e(x,y) = |I(x+1,y) − I(x,y)| + |I(x,y+1) − I(x,y)|
//! ```
//!
//! Neighbors past the right or bottom edge contribute nothing, so the
//! last column has no horizontal term and the last row no vertical one.

use crate::cq;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, GrayImage, ImageBuffer, Luma, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

/// One non-negative energy per pixel, addressed `(x, y)`.
pub type EnergyMap = TwoDimensionalMap<f64>;

// Pixel -> Intensity
#[inline]
fn intensity<P, S>(p: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let channels = p.channels();
    let total: f64 = channels
        .iter()
        .map(|c| <f64 as NumCast>::from(*c).unwrap_or(0.0))
        .sum();
    total / channels.len() as f64
}

fn intensity_map<I, P, S>(image: &I) -> TwoDimensionalMap<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut gray = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        gray[(x, y)] = intensity(&image.get_pixel(x, y));
    }
    gray
}

#[inline]
fn energy_at(gray: &TwoDimensionalMap<f64>, x: u32, y: u32) -> f64 {
    let (mw, mh) = (gray.width - 1, gray.height - 1);
    let here = gray[(x, y)];
    cq!(x >= mw, 0.0, (gray[(x + 1, y)] - here).abs())
        + cq!(y >= mh, 0.0, (gray[(x, y + 1)] - here).abs())
}

// Fills a run of whole rows, starting at `first_row`, into `out`.
fn fill_rows(gray: &TwoDimensionalMap<f64>, out: &mut [f64], first_row: u32) {
    let width = gray.width as usize;
    for (i, cell) in out.iter_mut().enumerate() {
        let (x, y) = ((i % width) as u32, first_row + (i / width) as u32);
        *cell = energy_at(gray, x, y);
    }
}

#[cfg(not(feature = "threaded"))]
fn fill_energy(gray: &TwoDimensionalMap<f64>, energy: &mut EnergyMap) {
    fill_rows(gray, energy.as_mut_slice(), 0);
}

// Every cell only reads the intensity map, so the output can be cut
// into bands of whole rows with chunks_mut and each band handed to
// its own thread without anything unsafe.
#[cfg(feature = "threaded")]
fn fill_energy(gray: &TwoDimensionalMap<f64>, energy: &mut EnergyMap) {
    let width = gray.width as usize;
    if width == 0 || gray.height == 0 {
        return;
    }
    let workers = num_cpus::get().max(1);
    let band = (gray.height as usize + workers - 1) / workers;

    let result = crossbeam::scope(|scope| {
        for (n, chunk) in energy.as_mut_slice().chunks_mut(band * width).enumerate() {
            let first_row = (n * band) as u32;
            scope.spawn(move |_| fill_rows(gray, chunk, first_row));
        }
    });
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}

// Image -> Energy Map

/// Compute the energy of every pixel in an image.  This is generic on
/// the image type; any channel count works, though the carver is only
/// ever handed RGB.
pub fn compute_energy<I, P, S>(image: &I) -> EnergyMap
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let gray = intensity_map(image);
    let mut energy = EnergyMap::new(gray.width, gray.height);
    fill_energy(&gray, &mut energy);
    energy
}

/// Render an energy map as a greyscale image, scaled so that the
/// hottest pixel is white.  A map with no energy at all is black.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let peak = energy.as_slice().iter().cloned().fold(0.0_f64, f64::max);
    ImageBuffer::from_fn(energy.width, energy.height, |x, y| {
        let level = cq!(peak > 0.0, energy[(x, y)] / peak * 255.0, 0.0);
        Luma([level.round().max(0.0).min(255.0) as u8])
    })
}
