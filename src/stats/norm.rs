use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("at least one sequence is required")]
    Empty,

    #[error("sequence {index} has length {found}, expected {expected}")]
    ShapeMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

/// Element-wise Euclidean norm across any number of equal-length sequences.
///
/// `out[i] = sqrt(sum_j seq_j[i]^2)`. With a single sequence this is its
/// absolute value. Lengths are checked before anything is computed.
pub fn euclidean_norm<S: AsRef<[f64]>>(sequences: &[S]) -> Result<Vec<f64>, ShapeError> {
    let (first, rest) = sequences.split_first().ok_or(ShapeError::Empty)?;
    let expected = first.as_ref().len();

    if let Some((index, seq)) = rest
        .iter()
        .enumerate()
        .find(|(_, s)| s.as_ref().len() != expected)
    {
        return Err(ShapeError::ShapeMismatch {
            index: index + 1,
            expected,
            found: seq.as_ref().len(),
        });
    }

    Ok((0..expected)
        .map(|i| {
            sequences
                .iter()
                .map(|s| s.as_ref()[i].powi(2))
                .sum::<f64>()
                .sqrt()
        })
        .collect())
}
