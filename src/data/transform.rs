use std::f64::consts::SQRT_2;

use super::model::{DataError, ObservationTable};

// ---------------------------------------------------------------------------
// Pixel frame → unit square
// ---------------------------------------------------------------------------

/// Affine frame mapping pixel responses onto the unit square.
///
/// The survey canvas has its origin at the top-left, so the vertical axis is
/// flipped: `x' = (x - origin_x) / scale`, `y' = -(y - origin_y) / scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationFrame {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale: f64,
}

impl Default for NormalizationFrame {
    fn default() -> Self {
        Self {
            origin_x: 360.0,
            origin_y: 270.0,
            scale: 200.0 * SQRT_2,
        }
    }
}

impl NormalizationFrame {
    pub fn normalize_x(&self, x: f64) -> f64 {
        (x - self.origin_x) / self.scale
    }

    pub fn normalize_y(&self, y: f64) -> f64 {
        -(y - self.origin_y) / self.scale
    }
}

/// Replace the two coordinate columns with their normalized values.
///
/// Returns a new table; every other column is carried over untouched.
pub fn normalize(
    table: &ObservationTable,
    x_column: &str,
    y_column: &str,
    frame: &NormalizationFrame,
) -> Result<ObservationTable, DataError> {
    let xs: Vec<f64> = table
        .numeric_column(x_column)?
        .into_iter()
        .map(|x| frame.normalize_x(x))
        .collect();
    let ys: Vec<f64> = table
        .numeric_column(y_column)?
        .into_iter()
        .map(|y| frame.normalize_y(y))
        .collect();

    table
        .with_numeric_column(x_column, &xs)?
        .with_numeric_column(y_column, &ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    const TOL: f64 = 1e-9;

    fn table(points: &[(f64, f64)]) -> ObservationTable {
        ObservationTable::new(
            vec!["x".into(), "y".into(), "ideo".into()],
            points
                .iter()
                .map(|&(x, y)| vec![CellValue::Float(x), CellValue::Float(y), CellValue::Integer(4)])
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn origin_maps_to_zero() {
        let frame = NormalizationFrame::default();
        assert!(frame.normalize_x(360.0).abs() < TOL);
        assert!(frame.normalize_y(270.0).abs() < TOL);
    }

    #[test]
    fn one_scale_right_maps_to_one() {
        let frame = NormalizationFrame::default();
        assert!((frame.normalize_x(360.0 + 200.0 * SQRT_2) - 1.0).abs() < TOL);
    }

    #[test]
    fn vertical_axis_is_flipped() {
        let frame = NormalizationFrame::default();
        assert!((frame.normalize_y(270.0 - 200.0 * SQRT_2) - 1.0).abs() < TOL);
        assert!((frame.normalize_y(470.0) + 1.0 / SQRT_2).abs() < TOL);
    }

    #[test]
    fn normalize_replaces_only_coordinates() {
        let raw = table(&[(360.0, 270.0), (560.0, 70.0)]);
        let out = normalize(&raw, "x", "y", &NormalizationFrame::default()).unwrap();

        let xs = out.numeric_column("x").unwrap();
        let ys = out.numeric_column("y").unwrap();
        assert!(xs[0].abs() < TOL && ys[0].abs() < TOL);
        assert!((xs[1] - 1.0 / SQRT_2).abs() < TOL);
        assert!((ys[1] - 1.0 / SQRT_2).abs() < TOL);
        assert_eq!(out.numeric_column("ideo").unwrap(), vec![4.0, 4.0]);
        // the input table is not modified
        assert_eq!(raw.numeric_column("x").unwrap(), vec![360.0, 560.0]);
    }

    #[test]
    fn missing_coordinate_column_fails() {
        let raw = table(&[(0.0, 0.0)]);
        let err = normalize(&raw, "px", "y", &NormalizationFrame::default()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { .. }));
    }

    #[test]
    fn non_numeric_coordinate_fails() {
        let raw = ObservationTable::new(
            vec!["x".into(), "y".into()],
            vec![vec![CellValue::Text("left".into()), CellValue::Float(1.0)]],
        )
        .unwrap();
        let err = normalize(&raw, "x", "y", &NormalizationFrame::default()).unwrap_err();
        assert!(matches!(err, DataError::NotNumeric { .. }));
    }
}
