use crate::conformal::{CircleParameters, Curve};
use crate::errors::{MappingError, Result};
use ncollide2d::na::Complex;
use std::f64::consts::TAU;
use tracing::debug;

pub const DEFAULT_SAMPLES: usize = 1000;

/// Sample the offset circle at `n_samples` evenly spaced angles over `[0, 2π]`, inclusive at
/// both ends. Each point is `c * e^(iθ) - offset`.
///
/// The returned curve is ordered by increasing angle. With two or more samples the last point
/// is an exact copy of the first, so the curve is closed without relying on `sin(2π)` rounding
/// to zero.
pub fn generate_circle(params: &CircleParameters, n_samples: usize) -> Result<Curve> {
    let beta = params.beta()?;

    if n_samples == 0 {
        return Err(MappingError::InvalidParameters(
            "circle needs at least one sample".to_string(),
        ));
    }

    debug!(radius = params.radius, beta, n_samples, "generating offset circle");

    let step = if n_samples == 1 {
        0.0
    } else {
        TAU / (n_samples - 1) as f64
    };
    let center = params.center();

    let mut points: Vec<Complex<f64>> = (0..n_samples)
        .map(|i| Complex::from_polar(params.radius, i as f64 * step) + center)
        .collect();

    if n_samples >= 2 {
        points[n_samples - 1] = points[0];
    }

    Ok(Curve::from_points(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use test_case::test_case;

    #[test_case(1000)]
    #[test_case(2)]
    #[test_case(37)]
    fn test_sample_count_and_closure(n: usize) {
        let circle = generate_circle(&CircleParameters::default(), n).unwrap();
        assert_eq!(n, circle.len());
        assert!(circle.is_closed(1e-12));
    }

    #[test]
    fn test_single_sample() {
        let params = CircleParameters::default();
        let circle = generate_circle(&params, 1).unwrap();
        assert_eq!(1, circle.len());
        assert_relative_eq!(1.0 - 0.2, circle.points()[0].re, epsilon = 1e-12);
        assert_relative_eq!(0.5, circle.points()[0].im, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_samples() {
        let result = generate_circle(&CircleParameters::default(), 0);
        assert!(matches!(result, Err(MappingError::InvalidParameters(_))));
    }

    #[test]
    fn test_domain_error() {
        let params = CircleParameters::new(1.0, Complex::new(0.0, 1.5));
        assert_eq!(
            Err(MappingError::Domain {
                imag: 1.5,
                radius: 1.0
            }),
            generate_circle(&params, 1000)
        );
    }

    #[test]
    fn test_points_lie_on_circle() {
        let params = CircleParameters::default();
        let circle = generate_circle(&params, 200).unwrap();
        for z in circle.iter() {
            assert_relative_eq!(params.radius, (z - params.center()).norm(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ordered_by_increasing_angle() {
        let params = CircleParameters::default();
        let circle = generate_circle(&params, 100).unwrap();
        let angles: Vec<f64> = circle
            .iter()
            .take(99)
            .map(|z| {
                let a = (z - params.center()).arg();
                if a < -1e-12 {
                    a + TAU
                } else {
                    a
                }
            })
            .collect();

        for w in angles.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn test_random_parameters() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let c: f64 = rng.gen_range(0.1..5.0);
            let offset = Complex::new(rng.gen_range(-2.0..2.0), rng.gen_range(-c..c));
            let n: usize = rng.gen_range(2..500);
            let circle = generate_circle(&CircleParameters::new(c, offset), n).unwrap();

            assert_eq!(n, circle.len());
            assert!(circle.is_closed(1e-12));
        }
    }
}
