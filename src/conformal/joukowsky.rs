use crate::conformal::{CircleParameters, ComplexPoint, Curve, EdgePoints};
use crate::errors::{MappingError, Result};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Something which can be carried through the Joukowsky map `w = z + k / z`. The map acts on
/// each point independently, so images keep the order and cardinality of their pre-images.
pub trait Joukowsky {
    type Output;

    /// Apply the map with an already computed constant `k`
    fn joukowsky(&self, k: f64) -> Result<Self::Output>;
}

fn map_point(z: ComplexPoint, k: f64) -> Option<ComplexPoint> {
    if z.re == 0.0 && z.im == 0.0 {
        None
    } else {
        Some(z + k / z)
    }
}

impl Joukowsky for ComplexPoint {
    type Output = ComplexPoint;

    fn joukowsky(&self, k: f64) -> Result<ComplexPoint> {
        map_point(*self, k).ok_or(MappingError::Singularity { index: None })
    }
}

impl Joukowsky for Curve {
    type Output = Curve;

    #[cfg(not(feature = "parallel"))]
    fn joukowsky(&self, k: f64) -> Result<Curve> {
        trace!(points = self.len(), k, "mapping curve");
        let points = self
            .iter()
            .enumerate()
            .map(|(i, z)| map_point(*z, k).ok_or(MappingError::Singularity { index: Some(i) }))
            .collect::<Result<Vec<_>>>()?;

        Ok(Curve::from_points(points))
    }

    #[cfg(feature = "parallel")]
    fn joukowsky(&self, k: f64) -> Result<Curve> {
        trace!(points = self.len(), k, "mapping curve in parallel");
        let points = self
            .points()
            .par_iter()
            .enumerate()
            .map(|(i, z)| map_point(*z, k).ok_or(MappingError::Singularity { index: Some(i) }))
            .collect::<Result<Vec<_>>>()?;

        Ok(Curve::from_points(points))
    }
}

impl Joukowsky for EdgePoints {
    type Output = EdgePoints;

    fn joukowsky(&self, k: f64) -> Result<EdgePoints> {
        Ok(EdgePoints::new(self.z1.joukowsky(k)?, self.z2.joukowsky(k)?))
    }
}

/// Map a point, curve, or pair of edge points with `w = z + k / z`, where
/// `k = radius - |offset|` is computed once from `params`.
///
/// Fails with `MappingError::Singularity` if any input point is exactly the origin. The
/// parameters themselves are not validated here, the map is defined for any `k`.
pub fn joukowsky_map<T: Joukowsky + ?Sized>(input: &T, params: &CircleParameters) -> Result<T::Output> {
    input.joukowsky(params.k())
}
