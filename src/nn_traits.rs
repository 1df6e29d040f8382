//! Capability contracts a model must expose to have its parameters
//! randomized.
//!
//! This crate never stores weights itself. Collaborators hand over their
//! parameters through one of the small traits below, and
//! [`crate::randomize::Randomizer`] traverses whatever shape was offered.

use crate::dtypes::Dtype;

/// A rectangular weight matrix addressable by `(row, column)`.
pub trait MatrixMut<E: Dtype> {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> E;
    fn set(&mut self, row: usize, col: usize, value: E);
}

/// A network whose trainable parameters are per-layer weight matrices
/// connecting layer `i` to layer `i + 1`.
///
/// Bias units are counted by [`LayeredNet::total_neuron_count`] but not by
/// [`LayeredNet::neuron_count`]: a bias feeds weights forward into the next
/// layer and never receives one, so the weight matrix for the gap
/// `layer -> layer + 1` is `total_neuron_count(layer) x neuron_count(layer + 1)`.
pub trait LayeredNet<E: Dtype> {
    /// Number of layers, input and output included.
    fn layer_count(&self) -> usize;

    /// Neuron count of `layer`, including its bias unit if it has one.
    fn total_neuron_count(&self, layer: usize) -> usize;

    /// Neuron count of `layer`, excluding any bias unit.
    fn neuron_count(&self, layer: usize) -> usize;

    /// The weight from neuron `from` in `layer` to neuron `to` in `layer + 1`.
    fn weight(&self, layer: usize, from: usize, to: usize) -> E;

    fn set_weight(&mut self, layer: usize, from: usize, to: usize, value: E);
}

/// A model exposing a fixed-length flatten/restore round-trip over its
/// entire parameter set, independent of any layer structure.
pub trait ParamCodec<E: Dtype> {
    /// Length of the flattened parameter vector.
    fn encoded_len(&self) -> usize;

    /// Writes every parameter into `buf`, which holds exactly
    /// [`ParamCodec::encoded_len`] elements.
    fn encode_into(&self, buf: &mut [E]);

    /// Restores every parameter from `buf`.
    fn decode_from(&mut self, buf: &[E]);
}

/// The parameter shape a model answers a capability query with.
///
/// `Opaque` is a first-class answer, not a fallthrough: models with
/// nothing randomizable are skipped without error, and that tolerance is
/// part of the contract.
pub enum Params<'a, E: Dtype> {
    /// Ordered per-layer weight matrices plus biases.
    Layers(&'a mut dyn LayeredNet<E>),
    /// A flatten/restore round-trip over every parameter.
    Codec(&'a mut dyn ParamCodec<E>),
    /// Nothing randomizable.
    Opaque,
}

/// Capability query: which [`Params`] shape does this model expose?
///
/// Answered once per [`crate::randomize::Randomizer::randomize_model`]
/// call.
pub trait HasParams<E: Dtype> {
    fn params_mut(&mut self) -> Params<'_, E>;
}
