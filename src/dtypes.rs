//! Module for the element types weight containers hold. Contains [Dtype].

/// Represents a scalar element of a weight container.
///
/// All randomization traversals are generic over this, so the same
/// strategy works on `f32` and `f64` parameter storage.
pub trait Dtype:
    'static
    + Copy
    + Clone
    + Default
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + std::marker::Unpin
    + num_traits::Float
    + num_traits::FromPrimitive
    + num_traits::ToPrimitive
    + rand::distributions::uniform::SampleUniform
{
}

impl Dtype for f32 {}
impl Dtype for f64 {}
