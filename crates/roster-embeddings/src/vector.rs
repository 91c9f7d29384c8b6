//! Dense vector helpers shared by the engine and the index.

use roster_core::errors::{EmbeddingError, RosterResult};

/// Fail unless `vector` has exactly `expected` components.
pub fn validate_dimensions(vector: &[f32], expected: usize) -> RosterResult<()> {
    if vector.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: vector.len(),
        }
        .into());
    }
    Ok(())
}

pub fn is_finite(vector: &[f32]) -> bool {
    vector.iter().all(|x| x.is_finite())
}

pub fn norm(vector: &[f32]) -> f32 {
    vector.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Scale to unit length in place. Returns `false` for a zero vector, which
/// is left untouched.
pub fn l2_normalize(vector: &mut [f32]) -> bool {
    let n = norm(vector);
    if n <= f32::EPSILON {
        return false;
    }
    vector.iter_mut().for_each(|x| *x /= n);
    true
}

/// Dot product. Equals cosine similarity when both inputs are unit length.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_produces_unit_length() {
        let mut v = vec![3.0, 4.0];
        assert!(l2_normalize(&mut v));
        assert_eq!(v, vec![0.6, 0.8]);
        assert!((norm(&v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_is_not_normalized() {
        let mut v = vec![0.0; 4];
        assert!(!l2_normalize(&mut v));
        assert_eq!(v, vec![0.0; 4]);
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        assert!(validate_dimensions(&[1.0, 2.0], 2).is_ok());
        assert!(validate_dimensions(&[1.0], 2).is_err());
    }

    #[test]
    fn non_finite_is_detected() {
        assert!(is_finite(&[1.0, -2.0]));
        assert!(!is_finite(&[f32::NAN]));
        assert!(!is_finite(&[f32::INFINITY]));
    }
}
