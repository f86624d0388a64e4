// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Padded allocations for arbitrary byte blobs.
//!
//! Backends want buffer sizes that are non-zero multiples of
//! [`COPY_BUFFER_ALIGNMENT`].  [`packed_size`] rounds a blob up to the next
//! boundary (and never below one unit); [`place_into`] copies the blob into such
//! an allocation.

use super::{COPY_BUFFER_ALIGNMENT, align_up};

/// Smallest allocation handed to the backend.
pub const MIN_ALLOCATION_BYTES: u32 = COPY_BUFFER_ALIGNMENT;

/// Size of a blob and of the allocation that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedAllocation {
    pub source_bytes: u32,
    pub allocated_bytes: u32,
}

impl PackedAllocation {
    pub fn for_source(source_bytes: u32) -> Self {
        PackedAllocation {
            source_bytes,
            allocated_bytes: packed_size(source_bytes),
        }
    }

    /// Trailing bytes past the source.
    pub const fn padding_bytes(&self) -> u32 {
        self.allocated_bytes - self.source_bytes
    }
}

/// Allocation size for a blob of `source_bytes`.
///
/// ```
/// use rows_and_levels::layout::buffer_packing::packed_size;
/// assert_eq!(packed_size(14), 16);
/// assert_eq!(packed_size(0), 4);
/// ```
pub fn packed_size(source_bytes: u32) -> u32 {
    align_up(source_bytes, COPY_BUFFER_ALIGNMENT).max(MIN_ALLOCATION_BYTES)
}

/// Copies `source` to the start of `allocation` and zeroes the remainder.
///
/// # Panics
/// If `allocation` is shorter than `source`.
pub fn place_into(allocation: &mut [u8], source: &[u8]) {
    assert!(
        allocation.len() >= source.len(),
        "Allocation ({}) is shorter than its source ({})",
        allocation.len(),
        source.len()
    );
    let (head, tail) = allocation.split_at_mut(source.len());
    head.copy_from_slice(source);
    tail.fill(0);
}

/// Returns an owned, padded copy of `source`.
///
/// # Panics
/// If `source` is longer than `u32::MAX` bytes.
pub fn pack(source: &[u8]) -> Vec<u8> {
    let source_bytes: u32 = source
        .len()
        .try_into()
        .expect("source blob longer than u32::MAX");
    let mut allocation = vec![0; packed_size(source_bytes) as usize];
    place_into(&mut allocation, source);
    allocation
}

#[cfg(test)]
mod tests {
    use super::{PackedAllocation, pack, packed_size, place_into};

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn sizes() {
        assert_eq!(packed_size(14), 16);
        assert_eq!(packed_size(16), 16);
        assert_eq!(packed_size(17), 20);
        assert_eq!(packed_size(1), 4);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn empty_source_still_allocates() {
        let allocation = PackedAllocation::for_source(0);
        assert_eq!(allocation.allocated_bytes, 4);
        assert_eq!(allocation.padding_bytes(), 4);
        assert_eq!(pack(&[]), vec![0, 0, 0, 0]);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn placement_zeroes_trailing_bytes() {
        let mut allocation = [0xAA; 8];
        place_into(&mut allocation, &[1, 2, 3, 4, 5]);
        assert_eq!(allocation, [1, 2, 3, 4, 5, 0, 0, 0]);
        assert_eq!(pack(&[9; 6]), vec![9, 9, 9, 9, 9, 9, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "shorter than its source")]
    fn short_allocation() {
        let mut allocation = [0; 2];
        place_into(&mut allocation, &[1, 2, 3]);
    }
}
