//! The mapping core: an offset circle in the z-plane, the two points on it which become the
//! leading and trailing edges, and the Joukowsky map `w = z + k / z` which carries both into the
//! airfoil plane.

use crate::airfoil::JoukowskyAirfoil;
use crate::errors::{MappingError, Result};
use crate::serialize::{complex_seq, Complexf64};
use ncollide2d::na::{Complex, Point2};
use serde::Serialize;

pub mod circle;
pub mod edges;
pub mod joukowsky;

pub use circle::{generate_circle, DEFAULT_SAMPLES};
pub use edges::edge_points;
pub use joukowsky::{joukowsky_map, Joukowsky};

pub type ComplexPoint = Complex<f64>;

/// Radius and offset of the circle in the z-plane. The circle is centered at `-offset`, so a
/// positive real offset moves it left and a negative imaginary offset moves it up.
///
/// The values are stored as given; every operation validates them before use so that a bad
/// offset surfaces as a `MappingError::Domain` from the operation itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleParameters {
    pub radius: f64,

    #[serde(with = "Complexf64")]
    pub offset: ComplexPoint,
}

impl Default for CircleParameters {
    fn default() -> Self {
        CircleParameters::new(1.0, Complex::new(0.2, -0.5))
    }
}

impl CircleParameters {
    pub fn new(radius: f64, offset: ComplexPoint) -> CircleParameters {
        CircleParameters { radius, offset }
    }

    /// Check that the radius is finite and positive, the offset is finite, and that
    /// `|offset.im| <= radius`.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MappingError::InvalidParameters(format!(
                "radius must be finite and positive, got {}",
                self.radius
            )));
        }

        if !self.offset.re.is_finite() || !self.offset.im.is_finite() {
            return Err(MappingError::InvalidParameters(format!(
                "offset must be finite, got {}",
                self.offset
            )));
        }

        if self.offset.im.abs() > self.radius {
            return Err(MappingError::Domain {
                imag: self.offset.im,
                radius: self.radius,
            });
        }

        Ok(())
    }

    pub fn center(&self) -> ComplexPoint {
        -self.offset
    }

    /// The angle `asin(offset.im / radius)`
    pub fn beta(&self) -> Result<f64> {
        self.validate()?;
        Ok((self.offset.im / self.radius).asin())
    }

    /// Half the distance between the two points where the circle crosses the real axis,
    /// `sqrt(radius^2 - offset.im^2)`.
    pub fn edge_radius(&self) -> Result<f64> {
        self.validate()?;
        let radicand = self.radius * self.radius - self.offset.im * self.offset.im;
        if radicand < 0.0 {
            return Err(MappingError::Domain {
                imag: self.offset.im,
                radius: self.radius,
            });
        }

        Ok(radicand.sqrt())
    }

    /// The Joukowsky constant `k = radius - |offset|`
    pub fn k(&self) -> f64 {
        self.radius - self.offset.norm()
    }
}

/// An ordered sequence of points in the complex plane. Order is drawing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    #[serde(serialize_with = "complex_seq::serialize")]
    points: Vec<ComplexPoint>,
}

impl Curve {
    pub fn from_points(points: Vec<ComplexPoint>) -> Curve {
        Curve { points }
    }

    pub fn points(&self) -> &[ComplexPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComplexPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&ComplexPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ComplexPoint> {
        self.points.last()
    }

    /// True if there are at least two points and the first and last are within `tol`
    pub fn is_closed(&self, tol: f64) -> bool {
        match (self.points.len(), self.first(), self.last()) {
            (n, Some(a), Some(b)) if n >= 2 => (a - b).norm() <= tol,
            _ => false,
        }
    }

    /// Convert to plane points with x as the real part and y as the imaginary part
    pub fn to_points(&self) -> Vec<Point2<f64>> {
        self.points.iter().map(to_point).collect()
    }
}

/// The pre-images (or images) of the trailing edge, `z1`, and the leading edge, `z2`.
///
/// By convention the trailing edge is the one with the larger real part and is drawn on the
/// right, the leading edge is on the left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgePoints {
    #[serde(with = "Complexf64")]
    pub z1: ComplexPoint,

    #[serde(with = "Complexf64")]
    pub z2: ComplexPoint,
}

impl EdgePoints {
    pub fn new(z1: ComplexPoint, z2: ComplexPoint) -> EdgePoints {
        EdgePoints { z1, z2 }
    }

    pub fn trailing(&self) -> ComplexPoint {
        self.z1
    }

    pub fn leading(&self) -> ComplexPoint {
        self.z2
    }

    pub fn to_points(&self) -> [Point2<f64>; 2] {
        [to_point(&self.z1), to_point(&self.z2)]
    }
}

pub fn to_point(z: &ComplexPoint) -> Point2<f64> {
    Point2::new(z.re, z.im)
}

/// Bundles a set of circle parameters with a sample count and exposes the three mapping
/// operations against them.
#[derive(Debug, Clone)]
pub struct ConformalMapper {
    params: CircleParameters,
    n_samples: usize,
}

impl ConformalMapper {
    pub fn new(params: CircleParameters) -> ConformalMapper {
        ConformalMapper {
            params,
            n_samples: DEFAULT_SAMPLES,
        }
    }

    pub fn with_samples(mut self, n_samples: usize) -> ConformalMapper {
        self.n_samples = n_samples;
        self
    }

    pub fn params(&self) -> &CircleParameters {
        &self.params
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn generate_circle(&self) -> Result<Curve> {
        generate_circle(&self.params, self.n_samples)
    }

    pub fn edge_points(&self) -> Result<EdgePoints> {
        edge_points(&self.params)
    }

    pub fn map<T: Joukowsky + ?Sized>(&self, input: &T) -> Result<T::Output> {
        joukowsky_map(input, &self.params)
    }

    /// Compute the circle, the edge points, and their images in one pass
    pub fn run(&self) -> Result<JoukowskyAirfoil> {
        JoukowskyAirfoil::compute(&self.params, self.n_samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(1.0, 0.2, -0.5)]
    #[test_case(1.0, 0.0, 1.0)]
    #[test_case(2.0, -0.3, 1.9)]
    #[test_case(0.5, 10.0, 0.0)]
    fn test_valid_parameters(c: f64, re: f64, im: f64) {
        let params = CircleParameters::new(c, Complex::new(re, im));
        assert!(params.validate().is_ok());
    }

    #[test_case(1.0, 0.0, 1.5)]
    #[test_case(1.0, 0.0, -1.0001)]
    #[test_case(0.1, 0.0, 0.2)]
    fn test_domain_error(c: f64, re: f64, im: f64) {
        let params = CircleParameters::new(c, Complex::new(re, im));
        assert_eq!(
            Err(MappingError::Domain { imag: im, radius: c }),
            params.validate()
        );
        assert!(params.beta().is_err());
        assert!(params.edge_radius().is_err());
    }

    #[test_case(0.0, 0.0, 0.0)]
    #[test_case(-1.0, 0.0, 0.0)]
    #[test_case(f64::NAN, 0.0, 0.0)]
    #[test_case(1.0, f64::INFINITY, 0.0)]
    fn test_invalid_parameters(c: f64, re: f64, im: f64) {
        let params = CircleParameters::new(c, Complex::new(re, im));
        assert!(matches!(
            params.validate(),
            Err(MappingError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_derived_constants() {
        let params = CircleParameters::default();
        assert_relative_eq!(-0.2, params.center().re, epsilon = 1e-12);
        assert_relative_eq!(0.5, params.center().im, epsilon = 1e-12);
        assert_relative_eq!(-std::f64::consts::FRAC_PI_6, params.beta().unwrap(), epsilon = 1e-12);
        assert_relative_eq!(0.75_f64.sqrt(), params.edge_radius().unwrap(), epsilon = 1e-12);
        assert_relative_eq!(1.0 - 0.29_f64.sqrt(), params.k(), epsilon = 1e-12);
    }

    #[test_case(1.0, 0.3, 0.4, 0.5)]
    #[test_case(2.0, -3.0, 4.0, -3.0)]
    #[test_case(1.0, 0.0, 0.0, 1.0)]
    fn test_k_uses_offset_magnitude(c: f64, re: f64, im: f64, e: f64) {
        let params = CircleParameters::new(c, Complex::new(re, im));
        assert_relative_eq!(e, params.k(), epsilon = 1e-12);
    }

    #[test]
    fn test_curve_closure() {
        let open = Curve::from_points(vec![Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)]);
        let closed = Curve::from_points(vec![
            Complex::new(0.0, 0.0),
            Complex::new(1.0, 0.0),
            Complex::new(0.0, 0.0),
        ]);
        let single = Curve::from_points(vec![Complex::new(0.0, 0.0)]);

        assert!(!open.is_closed(1e-9));
        assert!(closed.is_closed(1e-9));
        assert!(!single.is_closed(1e-9));
    }

    #[test]
    fn test_edge_orientation() {
        let edges = EdgePoints::new(Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0));
        assert_eq!(Complex::new(1.0, 0.0), edges.trailing());
        assert_eq!(Complex::new(-1.0, 0.0), edges.leading());

        let [t, l] = edges.to_points();
        assert_eq!(Point2::new(1.0, 0.0), t);
        assert_eq!(Point2::new(-1.0, 0.0), l);
    }

    #[test]
    fn test_mapper_defaults() {
        let mapper = ConformalMapper::new(CircleParameters::default());
        assert_eq!(DEFAULT_SAMPLES, mapper.n_samples());
        assert_eq!(DEFAULT_SAMPLES, mapper.generate_circle().unwrap().len());

        let mapper = mapper.with_samples(50);
        let result = mapper.run().unwrap();
        assert_eq!(50, result.circle.len());
        assert_eq!(50, result.airfoil.len());
    }

    #[test]
    fn test_mapper_map_matches_free_function() {
        let params = CircleParameters::default();
        let mapper = ConformalMapper::new(params);
        let edges = mapper.edge_points().unwrap();
        assert_eq!(
            joukowsky_map(&edges, &params).unwrap(),
            mapper.map(&edges).unwrap()
        );
    }
}
