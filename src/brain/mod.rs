//! Procedural brain canvas: silhouette, generated scene, and animation state.
//!
//! The scene is two lobes of an organic "brain" outline. The left lobe holds a
//! grid of small pulsing shape markers, the right lobe a scatter of flickering
//! glyphs. Membership and positions are decided once per canvas size; only
//! per-element opacity, lit/flicker timers, and jitter change per frame.
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Lobe ellipses, containment test, hover hit-test, outline path |
//! | [`scatter`] | Minimum-distance rejection sampling |
//! | [`scene`] | Scene generation and per-element types |
//! | [`animator`] | Entrance timeline, ambient effects, hover intensity |

pub mod animator;
pub mod geometry;
pub mod scatter;
pub mod scene;

pub use animator::Animator;
pub use geometry::{BrainGeometry, Lobe};
pub use scene::{GlyphPoint, Scene, ShapeKind, ShapeMarker};
