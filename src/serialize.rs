use ncollide2d::na::Complex;
use serde::Serialize;

#[derive(Serialize)]
#[serde(remote = "Complex<f64>")]
pub struct Complexf64 {
    re: f64,
    im: f64,
}

/// Serializes a slice of complex points as a sequence of `{"re": .., "im": ..}` objects
pub mod complex_seq {
    use super::Complexf64;
    use ncollide2d::na::Complex;
    use serde::{Serialize, Serializer};

    #[derive(Serialize)]
    struct Wrapped(#[serde(with = "Complexf64")] Complex<f64>);

    pub fn serialize<S: Serializer>(points: &[Complex<f64>], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(points.iter().map(|z| Wrapped(*z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conformal::{CircleParameters, Curve, EdgePoints};
    use serde_json::json;

    #[test]
    fn test_serialize_parameters() {
        let value = serde_json::to_value(CircleParameters::default()).unwrap();
        assert_eq!(
            json!({"radius": 1.0, "offset": {"re": 0.2, "im": -0.5}}),
            value
        );
    }

    #[test]
    fn test_serialize_curve() {
        let curve = Curve::from_points(vec![Complex::new(1.0, 2.0), Complex::new(-3.0, 0.5)]);
        let value = serde_json::to_value(&curve).unwrap();
        assert_eq!(
            json!({"points": [{"re": 1.0, "im": 2.0}, {"re": -3.0, "im": 0.5}]}),
            value
        );
    }

    #[test]
    fn test_serialize_edges() {
        let edges = EdgePoints::new(Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0));
        let value = serde_json::to_value(edges).unwrap();
        assert_eq!(
            json!({"z1": {"re": 1.0, "im": 0.0}, "z2": {"re": -1.0, "im": 0.0}}),
            value
        );
    }
}
