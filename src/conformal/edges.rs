use crate::conformal::{CircleParameters, EdgePoints};
use crate::errors::Result;
use ncollide2d::na::Complex;
use tracing::debug;

/// Find the two points where the offset circle crosses the real axis. These are the
/// pre-images of the trailing edge (`z1`, the positive root) and the leading edge (`z2`, the
/// negative root). Both have a zero imaginary part and `z1.re >= z2.re`.
pub fn edge_points(params: &CircleParameters) -> Result<EdgePoints> {
    let r = params.edge_radius()?;
    debug!(edge_radius = r, "locating edge pre-images");

    Ok(EdgePoints::new(
        Complex::new(r - params.offset.re, 0.0),
        Complex::new(-r - params.offset.re, 0.0),
    ))
}
