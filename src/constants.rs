//! Buffer size constants for line storage.
//!
//! This module defines the sizes used when a [`LineBuffer`](crate::LineBuffer) is allocated or
//! grown. Every capacity the crate picks on its own is a power of two multiple of
//! [`DEFAULT_CAPACITY`].
//!
//! # Size Hierarchy
//!
//! The constants establish a three-tier hierarchy:
//! - [`DEFAULT_CAPACITY`]: The first allocation of a fresh buffer (1 KiB)
//! - [`DEFAULT_MAX_CAPACITY`]: The default growth limit of a [`LineReader`](crate::LineReader)
//!   (1 MiB)
//! - [`PRACTICAL_MAX_SIZE`]: The platform maximum, used to reject unreasonable requests
//!
//! # Invariant
//!
//! The following relationships must hold between the constants:
//!
//! - `DEFAULT_CAPACITY` is a power of 2 and at least `MIN_CAPACITY`, so it always fits a byte plus
//!   a terminator
//! - `DEFAULT_MAX_CAPACITY > DEFAULT_CAPACITY` and is a power of 2 multiple of `DEFAULT_CAPACITY`
//! - `PRACTICAL_MAX_SIZE > DEFAULT_MAX_CAPACITY` and is a power of 2 multiple of
//!   `DEFAULT_CAPACITY`

/// Smallest capacity that fits a byte of content plus the terminator.
///
/// A buffer below this size can only ever hold an empty line.
pub const MIN_CAPACITY: usize = 2;

/// Capacity (1 KiB) allocated for a buffer on its first read.
///
/// Lines longer than `DEFAULT_CAPACITY - 1` bytes either get truncated or trigger growth,
/// depending on the [`GrowthPolicy`](crate::GrowthPolicy) in use.
pub const DEFAULT_CAPACITY: usize =
    // 2^10 = 1024 = 1 KiB
    1 << 10;

/// Default growth limit (1 MiB) for [`GrowthPolicy::Grow`](crate::GrowthPolicy::Grow).
pub const DEFAULT_MAX_CAPACITY: usize =
    // 1 KiB * 2^10 = 1 MiB
    DEFAULT_CAPACITY * (1 << 10);

/// Practical maximum buffer size.
///
/// This is a platform limit, not a recommended size. It resolves to the largest power of two
/// multiple of [`DEFAULT_CAPACITY`] that a `Vec<u8>` can hold (`isize::MAX / 2 + 1`).
pub const PRACTICAL_MAX_SIZE: usize = DEFAULT_CAPACITY * (1 << (DEFAULT_CAPACITY.leading_zeros() - 1));
