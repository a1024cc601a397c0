/// Calculates the row-major strides for a given shape.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Converts a flat row-major index into per-dimension coordinates.
pub fn index_to_coord(index: usize, strides: &[usize], shape: &[usize]) -> Vec<usize> {
    let mut coord = vec![0; shape.len()];
    let mut remainder = index;
    for (dim, stride) in strides.iter().enumerate() {
        coord[dim] = remainder / stride;
        remainder %= stride;
    }
    coord
}

/// Splits a 1-D or 2-D shape into `(rows, cols)`, treating a vector as one row.
pub(crate) fn as_rows_cols(shape: &[usize]) -> Option<(usize, usize)> {
    match shape {
        [cols] => Some((1, *cols)),
        [rows, cols] => Some((*rows, *cols)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
