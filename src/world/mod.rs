// world/ - Board geometry
//
// Rotation of tile-local points and the obstacle mask.
// No wave state here, just cells.

mod geometry;
mod mask;

pub use geometry::*;
pub use mask::*;
