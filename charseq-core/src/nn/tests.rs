//! Tests for weight matrices, activations, dense layers and stacks.
//!
//! Covers hand-computed forward passes, context injection, the softmax law, shape checks
//! and provider determinism.

use approx::assert_abs_diff_eq;

use crate::nn::{
    relu, softmax, Activation, ConstantWeights, DenseLayer, FnWeights, LayerError,
    RandomWeights, Stack, WeightInit, WeightMatrix, WeightProvider,
};

fn matrix(rows: usize, cols: usize, data: &[f64]) -> WeightMatrix {
    WeightMatrix::from_vec(rows, cols, data.to_vec()).unwrap()
}

fn one_hot(len: usize, index: usize) -> Vec<f64> {
    let mut v = vec![0.0; len];
    v[index] = 1.0;
    v
}

/// w1 = [[1, 2], [3, 4]], w2 = [[1], [-1]].
fn small_layer(output_activation: Activation) -> DenseLayer {
    DenseLayer::new(
        matrix(2, 2, &[1.0, 2.0, 3.0, 4.0]),
        matrix(2, 1, &[1.0, -1.0]),
        Activation::Relu,
        output_activation,
    )
    .unwrap()
}

#[test]
fn matrix_transform_sums_over_rows() {
    let w = matrix(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let out = w.transform(&[1.0, -1.0]).unwrap();
    assert_eq!(out, vec![-3.0, -3.0, -3.0]);
    assert_eq!(w.get(1, 2), Some(6.0));
    assert_eq!(w.get(2, 0), None);
}

#[test]
fn matrix_rejects_wrong_length_and_non_finite() {
    assert!(matches!(
        WeightMatrix::from_vec(2, 2, vec![0.0; 3]),
        Err(LayerError::ShapeMismatch { expected: 4, got: 3, .. })
    ));
    assert_eq!(
        WeightMatrix::from_vec(2, 2, vec![0.0, 0.0, f64::NAN, 0.0]),
        Err(LayerError::NonFiniteWeight { row: 1, col: 0 })
    );
    assert!(WeightMatrix::from_fn(1, 2, |_, c| if c == 1 { f64::INFINITY } else { 0.0 }).is_err());
}

#[test]
fn matrix_size_overflow_is_an_error() {
    let overflow = LayerError::SizeOverflow { rows: usize::MAX, cols: 2 };
    assert_eq!(WeightMatrix::from_vec(usize::MAX, 2, Vec::new()), Err(overflow.clone()));
    assert_eq!(WeightMatrix::from_fn(usize::MAX, 2, |_, _| 0.0), Err(overflow.clone()));
    assert_eq!(ConstantWeights(0.0).matrix(usize::MAX, 2), Err(overflow));
    assert_eq!(WeightMatrix::len_for(3, 4), Ok(12));
}

#[test]
fn relu_clamps_negatives() {
    let mut v = vec![-1.0, 0.0, 2.5];
    relu(&mut v);
    assert_eq!(v, vec![0.0, 0.0, 2.5]);
}

#[test]
fn softmax_is_a_distribution() {
    let mut v = vec![1.0, 2.0, 3.0, -50.0];
    softmax(&mut v);
    assert_abs_diff_eq!(v.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    assert!(v.iter().all(|&p| p >= 0.0));
    assert!(v[2] > v[1] && v[1] > v[0]);
}

#[test]
fn softmax_handles_large_logits_and_empty_input() {
    let mut v = vec![1000.0, 1000.0];
    softmax(&mut v);
    assert_abs_diff_eq!(v[0], 0.5, epsilon = 1e-12);
    let mut empty: Vec<f64> = Vec::new();
    softmax(&mut empty);
    assert!(empty.is_empty());
}

#[test]
fn softmax_spreads_mass_over_infinite_logits() {
    let mut v = vec![f64::INFINITY, 1.0, f64::INFINITY, f64::NEG_INFINITY];
    softmax(&mut v);
    assert_eq!(v, vec![0.5, 0.0, 0.5, 0.0]);
}

#[test]
fn softmax_falls_back_to_uniform_on_nan_or_all_negative_infinity() {
    let mut v = vec![f64::NAN, 1.0, f64::INFINITY, 2.0];
    softmax(&mut v);
    assert_eq!(v, vec![0.25; 4]);
    let mut v = vec![f64::NEG_INFINITY; 2];
    softmax(&mut v);
    assert_eq!(v, vec![0.5; 2]);
}

#[test]
fn decoder_stays_a_distribution_when_activations_overflow() {
    // Finite weights of 1e200 push the final logits to +inf.
    let mut provider = ConstantWeights(1e200);
    let decoder = Stack::decoder(1, 3, 2, 3, &mut provider).unwrap();
    let probs = decoder.forward_with_context(&one_hot(3, 0), &[0.0, 0.0]).unwrap();
    assert_abs_diff_eq!(probs.iter().sum::<f64>(), 1.0, epsilon = 1e-6);
    assert!(probs.iter().all(|&p| p >= 0.0));
}

#[test]
fn dense_forward_matches_hand_computation() {
    // hidden = relu([1+3, 2+4]) = [4, 6]; output = 4 - 6 = -2
    let layer = small_layer(Activation::Identity);
    assert_eq!(layer.forward(&[1.0, 1.0]).unwrap(), vec![-2.0]);
    let layer = small_layer(Activation::Relu);
    assert_eq!(layer.forward(&[1.0, 1.0]).unwrap(), vec![0.0]);
}

#[test]
fn dense_context_is_added_before_activation() {
    // hidden = relu([4 - 10, 6 + 1]) = [0, 7]; output = -7
    let layer = small_layer(Activation::Identity);
    let out = layer.forward_with_context(&[1.0, 1.0], &[-10.0, 1.0]).unwrap();
    assert_eq!(out, vec![-7.0]);
}

#[test]
fn dense_rejects_wrong_input_length() {
    let layer = small_layer(Activation::Relu);
    assert_eq!(
        layer.forward(&[1.0, 2.0, 3.0]),
        Err(LayerError::ShapeMismatch {
            what: "dense layer input",
            expected: 2,
            got: 3
        })
    );
    assert!(matches!(
        layer.forward_with_context(&[1.0, 1.0], &[0.0]),
        Err(LayerError::ShapeMismatch { what: "dense layer context", .. })
    ));
}

#[test]
fn dense_new_rejects_unchained_matrices() {
    let err = DenseLayer::new(
        matrix(2, 3, &[0.0; 6]),
        matrix(2, 1, &[0.0; 2]),
        Activation::Relu,
        Activation::Relu,
    )
    .unwrap_err();
    assert!(matches!(err, LayerError::ShapeMismatch { expected: 3, got: 2, .. }));
}

#[test]
fn dense_init_rejects_misbehaving_provider() {
    struct Wrong;
    impl WeightProvider for Wrong {
        fn matrix(&mut self, _rows: usize, _cols: usize) -> Result<WeightMatrix, LayerError> {
            WeightMatrix::from_vec(1, 1, vec![0.0])
        }
    }
    let err = DenseLayer::init(3, 4, 5, Activation::Relu, Activation::Relu, &mut Wrong).unwrap_err();
    assert!(matches!(err, LayerError::ShapeMismatch { .. }));
}

#[test]
fn dense_softmax_output_sums_to_one() {
    let mut provider = RandomWeights::uniform(11).unwrap();
    let layer =
        DenseLayer::init(5, 7, 9, Activation::Relu, Activation::Softmax, &mut provider).unwrap();
    let out = layer.forward(&one_hot(5, 2)).unwrap();
    assert_eq!(out.len(), 9);
    assert_abs_diff_eq!(out.iter().sum::<f64>(), 1.0, epsilon = 1e-6);
    assert!(out.iter().all(|&p| p >= 0.0));
}

#[test]
fn empty_stack_is_rejected() {
    let mut provider = ConstantWeights(0.1);
    assert_eq!(Stack::new(Vec::new()).unwrap_err(), LayerError::EmptyStack);
    assert_eq!(
        Stack::encoder(0, 4, 3, &mut provider).unwrap_err(),
        LayerError::EmptyStack
    );
    assert_eq!(
        Stack::decoder(0, 4, 3, 4, &mut provider).unwrap_err(),
        LayerError::EmptyStack
    );
}

#[test]
fn stack_new_rejects_layers_that_do_not_chain() {
    let mut provider = ConstantWeights(0.5);
    let a = DenseLayer::init(2, 2, 3, Activation::Relu, Activation::Relu, &mut provider).unwrap();
    let b = DenseLayer::init(4, 2, 2, Activation::Relu, Activation::Relu, &mut provider).unwrap();
    assert!(matches!(
        Stack::new(vec![a, b]),
        Err(LayerError::ShapeMismatch { expected: 3, got: 4, .. })
    ));
}

#[test]
fn encoder_chains_sizes() {
    let mut provider = ConstantWeights(0.25);
    let encoder = Stack::encoder(3, 6, 4, &mut provider).unwrap();
    assert_eq!(encoder.len(), 3);
    assert!(!encoder.is_empty());
    assert_eq!(encoder.input_size(), 6);
    assert_eq!(encoder.output_size(), 4);
    assert_eq!(encoder.layers()[1].input_size(), 4);
    let out = encoder.forward(&one_hot(6, 0)).unwrap();
    assert_eq!(out.len(), 4);
    assert!(out.iter().all(|&x| x >= 0.0));
}

#[test]
fn encoder_forward_equals_layer_composition() {
    let mut provider = RandomWeights::uniform(3).unwrap();
    let encoder = Stack::encoder(2, 5, 4, &mut provider).unwrap();
    let x = one_hot(5, 4);
    let by_hand = encoder.layers()[1]
        .forward(&encoder.layers()[0].forward(&x).unwrap())
        .unwrap();
    assert_eq!(encoder.forward(&x).unwrap(), by_hand);
}

#[test]
fn decoder_output_is_a_distribution() {
    let mut provider = RandomWeights::uniform(7).unwrap();
    let decoder = Stack::decoder(3, 10, 8, 10, &mut provider).unwrap();
    let layers = decoder.layers();
    assert_eq!(layers[0].output_activation(), Activation::Relu);
    assert_eq!(layers[2].output_activation(), Activation::Softmax);
    let context: Vec<f64> = (0..8u8).map(|i| f64::from(i) * 0.1).collect();
    for token in 0..10 {
        let probs = decoder.forward_with_context(&one_hot(10, token), &context).unwrap();
        assert_eq!(probs.len(), 10);
        assert_abs_diff_eq!(probs.iter().sum::<f64>(), 1.0, epsilon = 1e-6);
        assert!(probs.iter().all(|&p| p >= 0.0));
    }
}

#[test]
fn decoder_injects_context_into_every_layer() {
    // Zero weights leave only the context in each hidden layer; w2 is zero so the final
    // softmax is uniform, and a short context must fail in the first layer.
    let mut provider = ConstantWeights(0.0);
    let decoder = Stack::decoder(2, 3, 2, 3, &mut provider).unwrap();
    let probs = decoder.forward_with_context(&one_hot(3, 0), &[1.0, 1.0]).unwrap();
    for p in probs {
        assert_abs_diff_eq!(p, 1.0 / 3.0, epsilon = 1e-12);
    }
    assert!(decoder.forward_with_context(&one_hot(3, 0), &[1.0]).is_err());
}

#[test]
fn context_changes_decoder_output() {
    let mut provider = FnWeights::new(|m, r, c| ((m + 1) * (r + 2 * c + 1)) as f64 % 5.0 - 2.0);
    let decoder = Stack::decoder(2, 4, 3, 4, &mut provider).unwrap();
    assert_eq!(provider.produced(), 4);
    let x = one_hot(4, 1);
    let a = decoder.forward_with_context(&x, &[0.0, 0.0, 0.0]).unwrap();
    let b = decoder.forward_with_context(&x, &[3.0, -1.0, 2.0]).unwrap();
    assert_ne!(a, b);
}

#[test]
fn random_weights_are_reproducible() {
    let mut a = RandomWeights::new(42, WeightInit::Normal, 0.08).unwrap();
    let mut b = RandomWeights::new(42, WeightInit::Normal, 0.08).unwrap();
    assert_eq!(a.matrix(3, 4).unwrap(), b.matrix(3, 4).unwrap());
    let mut c = RandomWeights::new(43, WeightInit::Normal, 0.08).unwrap();
    assert_ne!(a.matrix(3, 4).unwrap(), c.matrix(3, 4).unwrap());
}

#[test]
fn uniform_weights_stay_in_range() {
    let mut p = RandomWeights::new(1, WeightInit::Uniform, 0.5).unwrap();
    let m = p.matrix(16, 16).unwrap();
    assert!(m.as_slice().iter().all(|w| (-0.5..0.5).contains(w)));
}

#[test]
fn random_weights_reject_bad_scale() {
    assert!(matches!(
        RandomWeights::new(0, WeightInit::Uniform, 0.0),
        Err(LayerError::InvalidInit(_))
    ));
    assert!(RandomWeights::new(0, WeightInit::Normal, f64::NAN).is_err());
    assert_eq!("gaussian".parse::<WeightInit>(), Ok(WeightInit::Normal));
}

#[test]
fn constant_weights_reject_non_finite_fill() {
    let mut p = ConstantWeights(f64::INFINITY);
    assert!(matches!(p.matrix(1, 1), Err(LayerError::NonFiniteWeight { .. })));
}
