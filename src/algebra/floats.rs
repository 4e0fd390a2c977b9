#![allow(non_snake_case)]
use num_traits::float::TotalOrder;
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point types used by the conversion and
/// validation layers.
///
/// Conversion, validation and diagnostics are generic over `FloatT`, with
/// implementations provided for the f32 and f64 native types.   The native
/// solve path is restricted to f64 since that is the only value type the
/// external solvers accept.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
pub trait FloatT:
    'static
    + Send
    + Sync
    + Float
    + TotalOrder
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + TotalOrder
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

/// Trait for converting Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// This convenience trait is implemented on f32/64 and u32/64.  It is used
/// internally for converting constant primitives and the f64 thresholds held
/// in [`SolverSettings`](crate::solver::SolverSettings) to [`FloatT`](crate::algebra::FloatT).

// NB: `AsFloatT` is a convenience trait for f32/64 and u32/64
// so that we can do things like (2.0).as_T() everywhere on
// constants, rather than the awful T::from_f32(2.0).unwrap()
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: std::ops::Mul<T, Output = T> + FromPrimitive + Float + 'static,
        {
            #[inline]
            fn as_T(&self) -> T {
                // conversion into f32 can only fail on overflow,
                // in which case saturate at infinity
                T::$ident(*self).unwrap_or_else(T::infinity)
            }
        }
    };
}
impl_as_FloatT!(u32, from_u32);
impl_as_FloatT!(u64, from_u64);
impl_as_FloatT!(usize, from_usize);
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);

#[test]
fn test_as_T_saturates() {
    let x: f32 = (1e300_f64).as_T();
    assert!(x.is_infinite());
    let y: f64 = (3_usize).as_T();
    assert_eq!(y, 3.0);
}
