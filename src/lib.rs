//! Joukowsky transformation of an offset circle into an airfoil, with an SVG renderer for the
//! circle and airfoil planes.

pub mod airfoil;
pub mod conformal;
pub mod errors;
pub mod render;
pub mod serialize;

pub use airfoil::JoukowskyAirfoil;
pub use conformal::{
    edge_points, generate_circle, joukowsky_map, CircleParameters, ComplexPoint,
    ConformalMapper, Curve, EdgePoints, Joukowsky, DEFAULT_SAMPLES,
};
pub use errors::{MappingError, RenderError, Result};
