//! # reinit
//!
//! Pluggable weight randomization for neural network parameters.
//!
//! Everything in this crate derives from one extension point: a
//! [`randomize::Randomizer`] strategy defines how a single scalar is
//! rewritten, and the trait's provided traversals apply that rule in place
//! across flat slices, sub-ranges, 2-D grids, matrix collaborators, and
//! whole models.
//!
//! # Randomizing containers
//!
//! ```rust
//! use reinit::prelude::*;
//!
//! let mut rand = Gaussian::seed_from_u64(0.0, 0.1, 42);
//!
//! let mut bias = vec![0.0; 8];
//! rand.randomize(&mut bias);
//!
//! let mut grid = vec![vec![0.0; 3]; 2];
//! rand.randomize_grid(&mut grid);
//! ```
//!
//! # Randomizing models
//!
//! Models opt in through the capability contracts in [`nn_traits`]. A
//! [`nn_traits::HasParams`] answer of [`nn_traits::Params::Layers`] walks
//! every inter-layer weight matrix, [`nn_traits::Params::Codec`] runs an
//! encode-randomize-decode round-trip over the flattened parameter vector,
//! and [`nn_traits::Params::Opaque`] is skipped without error.
//!
//! # Determinism
//!
//! Every randomizer owns exactly one [`rand::rngs::StdRng`]. Constructing
//! with a seed (or calling [`randomize::Randomizer::reseed`]) makes a whole
//! initialization flow bit-for-bit reproducible.

pub mod dtypes;
mod error;
pub mod nn_traits;
pub mod randomize;

pub use error::Error;

pub mod prelude {
    pub use crate::dtypes::Dtype;
    pub use crate::error::Error;
    pub use crate::nn_traits::{HasParams, LayeredNet, MatrixMut, ParamCodec, Params};
    pub use crate::randomize::{Distort, Gaussian, RangeUniform, Randomizer};
}
