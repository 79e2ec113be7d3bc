//! Byte lengths of encoded flat coordinate blocks, for pre-sizing output buffers.

const COUNT_BYTES: usize = 4;
const SCALAR_BYTES: usize = 8;

/// The byte length of a level 0 block
pub fn flat_coords_0_size(stride: usize) -> usize {
    stride * SCALAR_BYTES
}

/// The byte length of a level 1 block holding `num_scalars` scalars
pub fn flat_coords_1_size(num_scalars: usize) -> usize {
    COUNT_BYTES + num_scalars * SCALAR_BYTES
}

/// The byte length of a level 2 block split at `ends`
pub fn flat_coords_2_size(ends: &[usize]) -> usize {
    let num_scalars = ends.last().copied().unwrap_or(0);
    COUNT_BYTES + ends.len() * COUNT_BYTES + num_scalars * SCALAR_BYTES
}

/// The byte length of a level 3 block split at `endss`
pub fn flat_coords_3_size(endss: &[Vec<usize>]) -> usize {
    let num_scalars = endss
        .iter()
        .rev()
        .find_map(|ends| ends.last())
        .copied()
        .unwrap_or(0);
    let num_rings: usize = endss.iter().map(Vec::len).sum();
    COUNT_BYTES + endss.len() * COUNT_BYTES + num_rings * COUNT_BYTES + num_scalars * SCALAR_BYTES
}
