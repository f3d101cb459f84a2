//! Chart aggregate: plotted points, geometry and style.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
