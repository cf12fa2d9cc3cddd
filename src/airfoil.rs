use crate::conformal::{
    edge_points, generate_circle, joukowsky_map, CircleParameters, Curve, EdgePoints,
};
use crate::errors::Result;
use ncollide2d::na::Point2;
use serde::Serialize;
use tracing::debug;

/// The full result of one mapping pass: the offset circle and its edge pre-images in the
/// z-plane, and their images in the airfoil plane.
#[derive(Debug, Clone, Serialize)]
pub struct JoukowskyAirfoil {
    pub params: CircleParameters,
    pub beta: f64,
    pub k: f64,
    pub circle: Curve,
    pub edges: EdgePoints,
    pub airfoil: Curve,
    pub mapped_edges: EdgePoints,
}

impl JoukowskyAirfoil {
    pub fn compute(params: &CircleParameters, n_samples: usize) -> Result<JoukowskyAirfoil> {
        let circle = generate_circle(params, n_samples)?;
        let edges = edge_points(params)?;
        let airfoil = joukowsky_map(&circle, params)?;
        let mapped_edges = joukowsky_map(&edges, params)?;

        let result = JoukowskyAirfoil {
            params: *params,
            beta: params.beta()?,
            k: params.k(),
            circle,
            edges,
            airfoil,
            mapped_edges,
        };
        debug!(beta = result.beta, k = result.k, chord = result.chord(), "mapped airfoil");

        Ok(result)
    }

    /// Distance along the real axis between the mapped leading and trailing edges
    pub fn chord(&self) -> f64 {
        (self.mapped_edges.trailing() - self.mapped_edges.leading()).norm()
    }

    pub fn to_outer_contour(&self) -> Vec<Point2<f64>> {
        self.airfoil.to_points()
    }
}
