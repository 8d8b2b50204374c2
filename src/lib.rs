//! Import airfoil section profiles from Selig-style coordinate files and
//! place them in a target sketch frame.
//!
//! The pipeline is three independent steps: [`profile`] turns raw file text
//! into a named, ordered outline, [`placement`] maps that outline onto a
//! chosen chord segment or scale factor, and [`outline`] hands the closed
//! polygon to whatever surface does the actual drawing. File acquisition and
//! rendering stay on the host's side of the [`outline::LineSink`] seam.

pub mod errors;
pub mod outline;
pub mod placement;
pub mod profile;
pub mod serialize;
