//! Bounds-checked byte range extraction.

use crate::error::{PrimitivesError, Result};

/// Returns `length` bytes of `data` starting at `offset`.
///
/// Fails with [`PrimitivesError::OutOfBounds`] when `offset + length` runs past the end
/// of `data` or overflows. A zero `length` at any in-bounds offset yields an empty slice.
pub fn slice(data: &[u8], offset: usize, length: usize) -> Result<&[u8]> {
    offset
        .checked_add(length)
        .and_then(|end| data.get(offset..end))
        .ok_or(PrimitivesError::OutOfBounds {
            offset,
            length,
            available: data.len(),
        })
}

/// Like [`slice`], but returns a fixed-size array reference.
pub fn slice_array<const N: usize>(data: &[u8], offset: usize) -> Result<&[u8; N]> {
    slice(data, offset, N)?
        .try_into()
        .map_err(|_| PrimitivesError::OutOfBounds {
            offset,
            length: N,
            available: data.len(),
        })
}
