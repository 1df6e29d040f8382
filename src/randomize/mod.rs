//! The randomization dispatcher: one scalar rule, applied across
//! increasingly structured containers.

mod distort;
mod gaussian;
mod range_uniform;

pub use distort::Distort;
pub use gaussian::Gaussian;
pub use range_uniform::RangeUniform;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    dtypes::Dtype,
    error::Error,
    nn_traits::{HasParams, LayeredNet, MatrixMut, Params},
};

/// Applies a pluggable per-value rule across weight containers.
///
/// Implementers supply two things: the scalar rule
/// ([`Randomizer::randomize_scalar`]) and access to the one generator the
/// instance owns ([`Randomizer::rng_mut`]). Every other operation is
/// provided, derived from the scalar rule; each traversal visits every
/// addressable element of its target exactly once and rewrites it in
/// place before returning.
///
/// ```rust
/// use reinit::prelude::*;
///
/// let mut rand = RangeUniform::seed_from_u64(-1.0, 1.0, 0);
/// let mut weights = [0.0; 4];
/// rand.randomize(&mut weights);
/// assert!(weights.iter().all(|w| (-1.0..1.0).contains(w)));
/// ```
///
/// A randomizer is single-stream: the provided methods hand out samples
/// from one [`StdRng`] behind `&mut self`, so one instance serves one
/// initialization flow at a time. Randomizing independent containers
/// concurrently takes separate instances, or external locking.
pub trait Randomizer<E: Dtype> {
    /// The generator owned by this randomizer.
    ///
    /// All provided sampling methods draw from this single stream. Its
    /// position advances monotonically with each sample and is only ever
    /// reset through [`Randomizer::reseed`].
    fn rng_mut(&mut self) -> &mut StdRng;

    /// Produces the replacement for a single value.
    ///
    /// The only operation a concrete strategy must define. Strategies may
    /// ignore `value` entirely ([`RangeUniform`], [`Gaussian`]) or derive
    /// the result from it ([`Distort`]). Finite input must map to finite
    /// output; propagating NaN or infinity is the strategy's
    /// responsibility, not the dispatcher's.
    fn randomize_scalar(&mut self, value: E) -> E;

    /// Replaces the owned generator with one seeded from `seed`.
    ///
    /// Reseeding twice with the same seed and replaying an identical call
    /// sequence reproduces bit-identical output.
    fn reseed(&mut self, seed: u64) {
        *self.rng_mut() = StdRng::seed_from_u64(seed);
    }

    /// Uniform sample in `[0, 1)`.
    fn next_uniform(&mut self) -> E {
        self.rng_mut().gen_range(E::zero()..E::one())
    }

    /// Uniform sample in `[min, max)`.
    ///
    /// # Panics
    /// Requires `max >= min`.
    fn next_uniform_between(&mut self, min: E, max: E) -> E {
        assert!(max >= min, "empty sample range: max {max} < min {min}");
        min + (max - min) * self.next_uniform()
    }

    /// Applies the scalar rule to every element of `data`, in order.
    fn randomize(&mut self, data: &mut [E]) {
        for v in data.iter_mut() {
            *v = self.randomize_scalar(*v);
        }
    }

    /// Applies the scalar rule to `data[offset..offset + len]`.
    ///
    /// Panics on out-of-range parameters; see
    /// [`Randomizer::try_randomize_range`].
    fn randomize_range(&mut self, data: &mut [E], offset: usize, len: usize) {
        self.try_randomize_range(data, offset, len).unwrap()
    }

    /// Fallible version of [`Randomizer::randomize_range`].
    ///
    /// Fails with [`Error::OutOfRange`] when `offset + len` exceeds
    /// `data.len()`, in which case nothing has been written.
    fn try_randomize_range(
        &mut self,
        data: &mut [E],
        offset: usize,
        len: usize,
    ) -> Result<(), Error> {
        let required = offset.saturating_add(len);
        if required > data.len() {
            return Err(Error::OutOfRange {
                required,
                available: data.len(),
            });
        }
        self.randomize(&mut data[offset..required]);
        Ok(())
    }

    /// Applies the scalar rule to every cell of a rectangular grid.
    ///
    /// Panics on ragged input; see [`Randomizer::try_randomize_grid`].
    fn randomize_grid(&mut self, rows: &mut [Vec<E>]) {
        self.try_randomize_grid(rows).unwrap()
    }

    /// Fallible version of [`Randomizer::randomize_grid`].
    ///
    /// The column count is fixed from row 0, and the grid is visited in
    /// row-major order. A later row shorter than row 0 fails with
    /// [`Error::OutOfRange`] rather than being silently truncated; rows
    /// visited before the failure keep their new values.
    fn try_randomize_grid(&mut self, rows: &mut [Vec<E>]) -> Result<(), Error> {
        let cols = rows.first().map_or(0, |row| row.len());
        for row in rows.iter_mut() {
            if row.len() < cols {
                return Err(Error::OutOfRange {
                    required: cols,
                    available: row.len(),
                });
            }
            self.randomize(&mut row[..cols]);
        }
        Ok(())
    }

    /// Applies the scalar rule across a matrix's full declared
    /// `rows() x cols()` extent, one read-transform-write per cell.
    fn randomize_matrix<M: MatrixMut<E> + ?Sized>(&mut self, mat: &mut M) {
        for r in 0..mat.rows() {
            for c in 0..mat.cols() {
                let v = self.randomize_scalar(mat.get(r, c));
                mat.set(r, c, v);
            }
        }
    }

    /// Randomizes the weight matrix leading out of `from_layer`.
    ///
    /// Source neurons include the bias unit, destination neurons do not:
    /// bias units feed weights forward and never receive one. Each weight
    /// is read, transformed, and written back individually, so a strategy
    /// may observe neighbors it already rewrote within the same call.
    fn randomize_layer<N: LayeredNet<E> + ?Sized>(&mut self, net: &mut N, from_layer: usize) {
        for from in 0..net.total_neuron_count(from_layer) {
            for to in 0..net.neuron_count(from_layer + 1) {
                let w = self.randomize_scalar(net.weight(from_layer, from, to));
                net.set_weight(from_layer, from, to, w);
            }
        }
    }

    /// Randomizes whatever parameters `model` exposes.
    ///
    /// Shorthand for querying [`HasParams::params_mut`] and dispatching
    /// through [`Randomizer::randomize_params`].
    fn randomize_model<M: HasParams<E>>(&mut self, model: &mut M) {
        self.randomize_params(model.params_mut());
    }

    /// Dispatches on the parameter shape a model answered with.
    ///
    /// - [`Params::Layers`]: every inter-layer weight matrix is
    ///   randomized via [`Randomizer::randomize_layer`]. The last layer
    ///   has no outgoing weights and is not separately visited.
    /// - [`Params::Codec`]: the parameters are encoded into a scratch
    ///   vector, the whole vector is randomized, and the result is decoded
    ///   back. The model is only mutated through that round-trip, with
    ///   exactly one encode and one decode.
    /// - [`Params::Opaque`]: nothing happens. Unsupported model shapes
    ///   are tolerated, never errors.
    fn randomize_params(&mut self, params: Params<'_, E>) {
        match params {
            Params::Layers(net) => {
                for from_layer in 0..net.layer_count().saturating_sub(1) {
                    self.randomize_layer(&mut *net, from_layer);
                }
            }
            Params::Codec(codec) => {
                let mut encoded = vec![E::zero(); codec.encoded_len()];
                codec.encode_into(&mut encoded);
                self.randomize(&mut encoded);
                codec.decode_from(&encoded);
            }
            Params::Opaque => {}
        }
    }
}
