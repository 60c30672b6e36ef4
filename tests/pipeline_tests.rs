// Host-side tests for the post-processing pass chain and loop cancellation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}
mod viewport {
    include!("../src/viewport.rs");
}
mod passes {
    include!("../src/passes.rs");
}
mod cancel {
    include!("../src/cancel.rs");
}

use cancel::CancelToken;
use config::BloomConfig;
use passes::*;
use std::cell::Cell;
use viewport::SurfaceSize;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn bloom_defaults() {
    let b = BloomConfig::default();
    assert_eq!(b.strength, 1.5);
    assert_eq!(b.radius, 0.5);
    assert_eq!(b.threshold, 0.1);
}

#[test]
fn render_pass_precedes_bloom() {
    let chain = PassChain::render_then_bloom(BloomConfig::default(), 1280, 720).unwrap();
    let names: Vec<_> = chain.passes().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["render", "bloom"]);
    assert_eq!(chain.output_bloom(), Some(BloomConfig::default()));
}

#[test]
fn bloom_before_render_is_rejected() {
    let mut chain = PassChain::new();
    let err = chain
        .add_pass(Pass::bloom(BloomConfig::default(), 10, 10))
        .unwrap_err();
    assert!(err.to_string().contains("bloom"));
    assert!(chain.passes().is_empty());

    chain.add_pass(Pass::Render).unwrap();
    chain
        .add_pass(Pass::bloom(BloomConfig::default(), 10, 10))
        .unwrap();
    assert_eq!(chain.passes()[0], Pass::Render);
}

#[test]
fn set_size_updates_bloom_resolution() {
    let mut chain = PassChain::render_then_bloom(BloomConfig::default(), 800, 600).unwrap();
    chain.set_size(1920, 1080);
    chain.set_size(1920, 1080);
    assert_eq!(
        chain.passes()[1],
        Pass::bloom(BloomConfig::default(), 1920, 1080)
    );
    assert_eq!(chain.passes()[0], Pass::Render);
}

#[test]
fn chain_must_end_in_bloom_to_present() {
    let mut chain = PassChain::new();
    chain.add_pass(Pass::Render).unwrap();
    assert_eq!(chain.output_bloom(), None);

    chain
        .add_pass(Pass::bloom(BloomConfig::default(), 4, 4))
        .unwrap();
    chain.add_pass(Pass::Render).unwrap();
    assert_eq!(chain.output_bloom(), None);
}

#[test]
fn level_weights_follow_radius() {
    let sharp = bloom_level_weights(0.0);
    let expected = [1.0, 0.8, 0.6, 0.4, 0.2];
    for (w, e) in sharp.iter().zip(expected) {
        assert!(close(*w, e), "{:?}", sharp);
    }

    let wide = bloom_level_weights(1.0);
    let expected = [0.2, 0.4, 0.6, 0.8, 1.0];
    for (w, e) in wide.iter().zip(expected) {
        assert!(close(*w, e), "{:?}", wide);
    }

    // Default radius weights every level the same
    let even = bloom_level_weights(BloomConfig::default().radius);
    assert!(even.iter().all(|w| close(*w, 0.6)), "{:?}", even);
}

#[test]
fn level_sizes_halve_down_to_one_pixel() {
    let sizes = bloom_level_sizes(SurfaceSize {
        width: 1920,
        height: 1080,
    });
    let dims: Vec<_> = sizes.iter().map(|s| (s.width, s.height)).collect();
    assert_eq!(
        dims,
        [(960, 540), (480, 270), (240, 135), (120, 67), (60, 33)]
    );

    let tiny = bloom_level_sizes(SurfaceSize {
        width: 5,
        height: 1,
    });
    assert!(tiny.iter().all(|s| !s.is_empty()));
    assert_eq!(tiny[4], SurfaceSize { width: 1, height: 1 });
}

#[test]
fn cancel_token_is_shared_and_sticky() {
    let token = CancelToken::new();
    let loop_side = token.clone();
    assert!(!loop_side.is_cancelled());
    token.cancel();
    assert!(loop_side.is_cancelled());
    token.cancel();
    assert!(token.is_cancelled());
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn frame_after_cancel_renders_nothing() {
    let token = CancelToken::new();
    let rendered = Cell::new(0);
    let render = || {
        rendered.set(rendered.get() + 1);
        true
    };

    assert!(token.run_frame(render));
    assert_eq!(rendered.get(), 1);

    token.clone().cancel();
    assert!(!token.run_frame(render));
    assert!(!token.run_frame(render));
    assert_eq!(rendered.get(), 1);
}

#[test]
fn failed_frame_cancels_the_loop() {
    let token = CancelToken::new();
    assert!(!token.run_frame(|| false));
    assert!(token.is_cancelled());
}

#[test]
fn cancel_hands_back_the_queued_frame() {
    let token = CancelToken::new();
    assert_eq!(token.clone().cancel(), None);

    let token = CancelToken::new();
    token.set_pending(7);
    token.set_pending(8);
    assert_eq!(token.cancel(), Some(8));
    assert_eq!(token.cancel(), None);

    // A frame that already ran leaves nothing to cancel
    let token = CancelToken::new();
    token.set_pending(3);
    assert!(token.run_frame(|| true));
    assert_eq!(token.cancel(), None);
}
