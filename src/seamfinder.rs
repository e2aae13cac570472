// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest top-to-bottom seam through an energy map.
//!
//! Classic dynamic programming: every cell of the cost matrix holds
//! the cheapest path that reaches it from the top row, plus a pointer
//! to the cell in the row above that path came through.  The seam is
//! then read back from the cheapest cell in the bottom row.  Ties
//! always go to the leftmost column, so the result is deterministic.

use crate::cq;
use crate::energy::EnergyMap;
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};

/// One column index per row, top to bottom.  Adjacent entries never
/// differ by more than one.
pub type Seam = Vec<u32>;

type CostMap = TwoDimensionalMap<EnergyAndBackPointer<f64>>;

// The column in `lo..=hi` with the smallest cost.  Only a strictly
// smaller cost displaces the current best, which keeps ties leftmost.
#[inline]
fn leftmost_min<F>(lo: u32, hi: u32, cost: F) -> u32
where
    F: Fn(u32) -> f64,
{
    (lo + 1..=hi).fold(lo, |best, x| cq!(cost(x) < cost(best), x, best))
}

fn calculate_cost(energy: &EnergyMap) -> CostMap {
    let (width, height) = energy.dimensions();
    let mut target = CostMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)].energy = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    // For every subsequent row, populate the target cell with the sum
    // of the *lowest adjacent upper energy* and the *x coordinate of
    // that energy*
    for y in 1..height {
        for x in 0..width {
            let parent_x = leftmost_min(
                cq!(x == 0, 0, x - 1),
                cq!(x == maxwidth, maxwidth, x + 1),
                |px| target[(px, y - 1)].energy,
            );
            let parent = target[(parent_x, y - 1)];
            target[(x, y)] = EnergyAndBackPointer::new(energy[(x, y)] + parent.energy, parent_x);
        }
    }
    target
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the cheapest seam.  The map must be at least one pixel in
/// each direction.
pub fn find_vertical_seam(energy: &EnergyMap) -> Seam {
    let (width, height) = energy.dimensions();
    debug_assert!(width > 0 && height > 0, "cannot seam an empty energy map");
    let cost = calculate_cost(energy);

    // Find the x coordinate of the bottommost seam with the least energy.
    let bottom = cost.row(height - 1);
    let mut seam_col = leftmost_min(0, width - 1, |x| bottom[x as usize].energy);

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    let mut seam: Seam = (0..height)
        .rev()
        .map(|y| {
            let x = seam_col;
            seam_col = cost[(x, y)].parent;
            x
        })
        .collect();
    seam.reverse();
    seam
}
