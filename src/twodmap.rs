// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An addressable two-dimensional field.
//!
//! Holds one value per pixel: a plain `f64` for the energy matrix, or
//! an energy + parent address for the cumulative cost matrix built
//! while searching for a seam.

use std::ops::{Index, IndexMut};

/// A row-major grid of `width * height` values, addressed by `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    values: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to the content type's
    /// default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            values: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  Returns `None` if the
    /// vector's length doesn't match the dimensions.
    pub fn from_vec(width: u32, height: u32, values: Vec<P>) -> Option<Self> {
        if values.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            values,
        })
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// One full row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.values[start..start + self.width as usize]
    }

    pub fn as_slice(&self) -> &[P] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.values
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.values[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.values[index]
    }
}

/// One cell of the cumulative cost matrix: the cheapest path cost
/// ending here, and the column in the row above that path came from.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub(crate) struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}

impl<P: Default + Copy> EnergyAndBackPointer<P> {
    pub fn new(energy: P, parent: u32) -> Self {
        EnergyAndBackPointer { energy, parent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_is_row_major() {
        let map = TwoDimensionalMap::from_vec(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(map[(2, 0)], 2);
        assert_eq!(map[(0, 1)], 3);
        assert_eq!(map.row(1), &[3, 4, 5]);
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(TwoDimensionalMap::from_vec(3, 2, vec![0u32; 5]).is_none());
    }

    #[test]
    fn index_mut_writes_one_cell() {
        let mut map: TwoDimensionalMap<u32> = TwoDimensionalMap::new(2, 2);
        map[(1, 1)] = 7;
        assert_eq!(map.as_slice(), &[0, 0, 0, 7]);
    }
}
