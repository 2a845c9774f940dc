//! Checked `ndarray` views over the caller's flat output buffers.
//!
//! The network-execution collaborator hands over flat `f32` slices plus a
//! shape; these adapters are the single place where a mis-wired shape can
//! be detected. Everything downstream indexes the validated views.

use ndarray::ArrayView2;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("{role} tensor has {actual} elements, expected {expected} ({rows}x{cols})")]
pub struct TensorShapeError {
    pub role: &'static str,
    pub expected: usize,
    pub actual: usize,
    pub rows: usize,
    pub cols: usize,
}

/// View a flat buffer as a `rows x cols` matrix.
///
/// `role` names the tensor in the error message ("scores", "box deltas",
/// ...) so a caller wiring the wrong output learns which one.
pub fn view2<'a>(
    buf: &'a [f32],
    rows: usize,
    cols: usize,
    role: &'static str,
) -> Result<ArrayView2<'a, f32>, TensorShapeError> {
    let expected = rows * cols;
    if buf.len() != expected {
        return Err(TensorShapeError {
            role,
            expected,
            actual: buf.len(),
            rows,
            cols,
        });
    }
    Ok(ArrayView2::from_shape((rows, cols), buf).expect("length checked above"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view2_valid_shape() {
        let buf = vec![0.0f32; 12];
        let view = view2(&buf, 3, 4, "scores").unwrap();
        assert_eq!(view.shape(), &[3, 4]);
    }

    #[test]
    fn test_view2_row_major_layout() {
        let buf: Vec<f32> = (0..6).map(|v| v as f32).collect();
        let view = view2(&buf, 2, 3, "scores").unwrap();
        assert_eq!(view[[0, 2]], 2.0);
        assert_eq!(view[[1, 0]], 3.0);
    }

    #[test]
    fn test_view2_length_mismatch() {
        let buf = vec![0.0f32; 11];
        let err = view2(&buf, 3, 4, "box deltas").unwrap_err();
        assert_eq!(err.expected, 12);
        assert_eq!(err.actual, 11);
        assert_eq!(err.role, "box deltas");
    }

    #[test]
    fn test_view2_error_message_names_role() {
        let buf = vec![0.0f32; 2];
        let err = view2(&buf, 1, 4, "landmark deltas").unwrap_err();
        assert!(err.to_string().contains("landmark deltas"));
    }

    #[test]
    fn test_view2_empty_buffer_zero_rows() {
        let buf: Vec<f32> = Vec::new();
        assert!(view2(&buf, 0, 4, "scores").is_ok());
    }
}
