//! Priority key types
//!
//! Priorities are raw unsigned integers compared with strict less-than.
//! The queue defaults to `u32`; any wider or narrower unsigned type can be
//! chosen to fit the caller's domain.

use std::fmt;

/// Trait for keys that can be used as queue priorities.
///
/// It is implemented for all unsigned integer types. Only the total order of
/// the raw integer is used; there is no notion of "infinite" priority.
pub trait Priority: Ord + Copy + fmt::Debug {}

macro_rules! impl_priority {
    ($($t:ty),+) => {
        $(
            impl Priority for $t {}
        )+
    };
}

impl_priority!(u8, u16, u32, u64, u128, usize);
