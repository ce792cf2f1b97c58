//! Core types and traits for the ixmem index-based structures.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! configuration error shared by every fixed-capacity structure and the
//! [`Bounded`] trait they all implement.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::ConfigError;
pub use traits::Bounded;

use std::mem;

/// Validate a construction-time capacity against `[minimum, maximum]`.
///
/// Zero is reported as [`ConfigError::ZeroCapacity`] regardless of
/// `minimum`, since it is the common misconfiguration.
pub fn check_capacity(requested: usize, minimum: usize, maximum: usize) -> Result<(), ConfigError> {
    if requested == 0 {
        return Err(ConfigError::ZeroCapacity);
    }
    if requested < minimum {
        return Err(ConfigError::CapacityTooSmall { minimum, requested });
    }
    if requested > maximum {
        return Err(ConfigError::CapacityTooLarge { maximum, requested });
    }
    Ok(())
}

/// Largest element count a buffer of `T` can address.
fn addressable<T>() -> usize {
    isize::MAX as usize / mem::size_of::<T>().max(1)
}

/// Allocate an empty vector with room for exactly `capacity` elements.
///
/// Allocation failure, including a byte size beyond `isize::MAX`, is
/// reported as [`ConfigError::CapacityTooLarge`] instead of aborting.
pub fn alloc_vec<T>(capacity: usize) -> Result<Vec<T>, ConfigError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| ConfigError::CapacityTooLarge {
            maximum: addressable::<T>(),
            requested: capacity,
        })?;
    Ok(buf)
}

/// Allocate a fixed buffer of `len` elements, `init(i)` building slot `i`.
pub fn alloc_buffer<T>(len: usize, init: impl FnMut(usize) -> T) -> Result<Box<[T]>, ConfigError> {
    let mut buf = alloc_vec(len)?;
    buf.extend((0..len).map(init));
    Ok(buf.into_boxed_slice())
}
