//! Shared numeric constants for the viewport and the brain canvas.
//!
//! These are perceptual tuning values. Changing them alters the feel of the
//! page but none of the invariants the cores maintain.

// ── Viewport: wheel ─────────────────────────────────────────────

/// Multiplier applied to raw wheel deltas before they move the offset.
pub const SCROLL_SPEED: f64 = 0.6;

/// Quiet period after the last wheel event before content pointer events
/// are re-enabled, in milliseconds.
pub const SCROLL_IDLE_MS: u32 = 100;

// ── Viewport: drag & momentum ───────────────────────────────────

/// Per-frame multiplier applied to momentum velocity.
pub const DRAG_FRICTION: f64 = 0.94;

/// Velocity (px/frame) below which momentum stops on an axis.
pub const MIN_VELOCITY: f64 = 0.1;

/// Pointer travel in pixels before a press becomes a confirmed drag.
pub const DRAG_THRESHOLD_PX: f64 = 8.0;

/// How long the drag flag stays raised after release, in milliseconds.
pub const DRAG_GRACE_MS: f64 = 50.0;

/// Reference frame duration used to express velocity in px/frame.
pub const VELOCITY_FRAME_MS: f64 = 16.0;

/// Weight of the newest sample in the drag velocity moving average.
pub const VELOCITY_SMOOTHING: f64 = 0.8;

// ── Viewport: keyboard ──────────────────────────────────────────

/// Key velocity gained per frame while an arrow key is held.
pub const KEY_ACCELERATION: f64 = 0.5;

/// Upper bound on key velocity per axis, in px/frame.
pub const KEY_MAX_SPEED: f64 = 8.0;

/// Per-frame multiplier applied to key velocity on an axis with no key held.
pub const KEY_FRICTION: f64 = 0.92;

/// Key velocity (px/frame) below which key motion is considered at rest.
pub const KEY_MIN_VELOCITY: f64 = 0.1;

// ── Viewport: DOM contract ──────────────────────────────────────

/// Attribute marking the child element to center on at mount.
pub const CENTER_ANCHOR_ATTR: &str = "data-center-tile";

// ── Brain: geometry ─────────────────────────────────────────────

/// Horizontal gap between the two lobe centers, in pixels.
pub const LOBE_GAP_PX: f64 = 32.0;

/// Distance from the vertical midline that both lobes keep clear.
pub const MIDLINE_MARGIN_PX: f64 = 10.0;

/// Size used when the canvas has no parent element to measure.
pub const FALLBACK_WIDTH: f64 = 600.0;
/// See [`FALLBACK_WIDTH`].
pub const FALLBACK_HEIGHT: f64 = 400.0;

// ── Brain: scene ────────────────────────────────────────────────

/// Number of glyph points scattered in the right lobe.
pub const GLYPH_COUNT: usize = 80;

/// Spacing of the shape marker grid in the left lobe.
pub const SHAPE_GRID_PX: f64 = 8.0;

/// Radius of an unlit shape marker.
pub const SHAPE_SIZE_PX: f64 = 3.0;

/// Fraction of in-lobe grid cells left empty.
pub const SHAPE_DROP_RATE: f64 = 0.25;

/// Fraction of glyph points that show a flipping binary digit.
pub const BINARY_GLYPH_RATE: f64 = 0.8;

/// Characters available to non-binary glyphs.
pub const GLYPH_POOL: [char; 11] = ['0', '1', '0', '1', '@', '#', '+', '-', '=', ':', ';'];

/// Shape marker palette as RGB triples.
pub const SHAPE_PALETTE: [[u8; 3]; 6] = [
    [255, 229, 164],
    [255, 74, 74],
    [73, 4, 11],
    [0, 81, 64],
    [35, 169, 141],
    [152, 34, 66],
];

// ── Brain: timing ───────────────────────────────────────────────

/// Duration of each element's entrance fade, in milliseconds.
pub const FADE_MS: f64 = 600.0;

/// Upper bound of the random per-element fade delay, in milliseconds.
pub const FADE_DELAY_MAX_MS: f64 = 1200.0;

/// Delay from scene start until the outline begins drawing.
pub const OUTLINE_DELAY_MS: f64 = 1400.0;

/// Time the outline takes to draw fully.
pub const OUTLINE_DRAW_MS: f64 = 1500.0;

/// Total outline resolution across both lobes.
pub const OUTLINE_POINTS: usize = 120;

/// Per-frame chance that a faded-in binary glyph flips.
pub const FLICKER_CHANCE: f64 = 0.008;

/// Minimum flicker duration; a random extra of up to
/// [`FLICKER_EXTRA_MS`] is added.
pub const FLICKER_BASE_MS: f64 = 220.0;
/// See [`FLICKER_BASE_MS`].
pub const FLICKER_EXTRA_MS: f64 = 200.0;

/// Per-frame chance that a faded-in, unlit shape marker lights up.
pub const LIT_CHANCE: f64 = 0.003;

/// Range of the lit duration, in milliseconds.
pub const LIT_MIN_MS: f64 = 1200.0;
/// See [`LIT_MIN_MS`].
pub const LIT_MAX_MS: f64 = 2000.0;

// ── Brain: hover ────────────────────────────────────────────────

/// Hover intensity change per pointer event.
pub const HOVER_STEP: f64 = 0.15;

/// Extra scale applied to a lobe at full hover intensity.
pub const HOVER_SCALE: f64 = 0.08;

/// Normalized ellipse radius within which the pointer counts as over a lobe.
pub const HOVER_TOLERANCE: f64 = 1.1;
