/// Numeric helpers applied to normalized responses.
///
/// * `norm` – element-wise Euclidean norm over any number of axes
/// * `kde`  – Gaussian kernel density estimate with a fixed bandwidth
pub mod kde;
pub mod norm;
