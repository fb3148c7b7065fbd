//! Dense vector primitives shared by the ERR engine.
use ndarray::ArrayView1;

/// Inner product of two equal-length vectors.
pub fn dot(u: ArrayView1<f64>, v: ArrayView1<f64>) -> f64 {
    debug_assert_eq!(u.len(), v.len());
    u.dot(&v)
}

/// Squared Euclidean norm.
///
/// No epsilon is added; callers dividing by the result must handle zero norms.
pub fn squared_norm(v: ArrayView1<f64>) -> f64 {
    v.dot(&v)
}
