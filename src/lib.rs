// #![deny(missing_docs)]

//! Content-aware image resizing by seam carving.

pub mod ternary;
pub mod twodmap;

pub mod energy;
pub use energy::{compute_energy, energy_to_image, EnergyMap};

pub mod seamfinder;
pub use seamfinder::{find_vertical_seam, Seam};

pub mod seameditor;
pub use seameditor::{insert_seam, remove_seam};

pub mod flipper;
pub use flipper::transpose;

pub mod seamcarver;
pub use seamcarver::{seamcarve, SeamCarver};

pub mod errors;
pub use errors::CarveError;

pub mod imageio;
pub mod target;
pub use target::parse_target;
