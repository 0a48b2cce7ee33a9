//! Infinite auto-scrolling project carousel.
//!
//! The strip is virtual: it stores the original card footprints and a pass
//! count, and maps any rendered index back to its original with
//! `index % original_count`. The host materializes the clones once.
//!
//! The strip scrolls left a fixed number of pixels per frame and snaps back
//! to zero once it has travelled one loop span. Because the content at the
//! span boundary repeats the content at zero, the snap is invisible.

use crate::error::FxError;
use crate::ticker::{Frame, Ticker};

/// Identifies one rendered card (original or clone) by its index in the strip.
pub type CardId = usize;

/// What occupies one rendered position of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    /// Index of the original card this slot shows.
    pub original: usize,
    pub is_clone: bool,
}

/// Originals followed by whole clone passes.
#[derive(Debug, Clone, PartialEq)]
pub struct Strip {
    footprints: Vec<f64>,
    original_width: f64,
    viewport_width: f64,
    passes: usize,
}

impl Strip {
    /// Builds a strip of `original_count` equally sized cards whose measured
    /// total is `original_width`.
    pub fn build(
        original_count: usize,
        original_width: f64,
        viewport_width: f64,
    ) -> Result<Self, FxError> {
        if original_count == 0 {
            return Err(FxError::EmptyStrip);
        }
        #[allow(clippy::cast_precision_loss)]
        let footprint = original_width / original_count as f64;
        Self::from_footprints(vec![footprint; original_count], viewport_width)
    }

    /// Builds a strip from the measured left edges of the original cards and
    /// the left edge where the first clone of card 0 lands.
    ///
    /// The difference between consecutive edges is each card's footprint, so
    /// gaps, margins and padding between copies are part of the pass width.
    pub fn from_offsets(
        card_lefts: &[f64],
        next_pass_left: f64,
        viewport_width: f64,
    ) -> Result<Self, FxError> {
        let footprints = card_lefts
            .iter()
            .zip(card_lefts.iter().skip(1).chain([&next_pass_left]))
            .map(|(left, next)| next - left)
            .collect();
        Self::from_footprints(footprints, viewport_width)
    }

    /// Builds a strip from per-card footprints (width plus trailing gap).
    ///
    /// Appends clone passes until the strip is at least twice the viewport.
    pub fn from_footprints(footprints: Vec<f64>, viewport_width: f64) -> Result<Self, FxError> {
        if !viewport_width.is_finite() || viewport_width < 0.0 {
            return Err(FxError::InvalidViewport(viewport_width));
        }
        let original_width: f64 = footprints.iter().sum();
        if footprints.is_empty()
            || footprints.iter().any(|f| !f.is_finite() || *f < 0.0)
            || original_width <= 0.0
        {
            return Err(FxError::EmptyStrip);
        }

        let mut passes = 1usize;
        while repeated_width(original_width, passes) < viewport_width * 2.0 {
            passes += 1;
        }

        let strip = Self {
            footprints,
            original_width,
            viewport_width,
            passes,
        };
        if passes == 1 {
            tracing::warn!(
                original_width,
                viewport_width,
                "Carousel needs no clones; the loop seam will be visible"
            );
        } else {
            tracing::debug!(
                passes,
                total_width = strip.total_width(),
                "Carousel strip built"
            );
        }
        Ok(strip)
    }

    pub fn original_count(&self) -> usize {
        self.footprints.len()
    }

    /// Number of full passes (1 = originals only).
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Number of rendered cards, originals plus clones.
    pub fn render_len(&self) -> usize {
        self.footprints.len() * self.passes
    }

    pub fn original_width(&self) -> f64 {
        self.original_width
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn total_width(&self) -> f64 {
        repeated_width(self.original_width, self.passes)
    }

    /// Distance travelled before the offset snaps back to zero.
    ///
    /// This is half the strip rounded down to whole passes, so the content at
    /// the span repeats the content at zero. It is intentionally not `T / 2`
    /// for an odd pass count: that would land mid-pass and jump on reset.
    /// With a single pass there is no repetition and the span falls back to
    /// half the strip.
    pub fn loop_span(&self) -> f64 {
        if self.passes < 2 {
            return self.total_width() / 2.0;
        }
        repeated_width(self.original_width, self.passes / 2)
    }

    /// Maps a rendered index to the card it shows.
    pub fn slot(&self, index: CardId) -> Option<CardSlot> {
        if index >= self.render_len() {
            return None;
        }
        let count = self.footprints.len();
        Some(CardSlot {
            original: index % count,
            is_clone: index >= count,
        })
    }

    /// Every rendered position in order.
    pub fn slots(&self) -> impl Iterator<Item = CardSlot> + '_ {
        (0..self.render_len()).filter_map(|index| self.slot(index))
    }

    /// Rendered index of the card covering `x` pixels from the strip start.
    pub fn card_at(&self, x: f64) -> Option<CardId> {
        if x < 0.0 || x >= self.total_width() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pass = (x / self.original_width).floor() as usize;
        #[allow(clippy::cast_precision_loss)]
        let mut within = x - self.original_width * pass as f64;
        for (i, footprint) in self.footprints.iter().enumerate() {
            if within < *footprint {
                return Some(pass * self.footprints.len() + i);
            }
            within -= footprint;
        }
        // Rounding left `x` a hair past the last footprint of the pass.
        Some(pass * self.footprints.len() + self.footprints.len() - 1)
    }
}

#[allow(clippy::cast_precision_loss)]
fn repeated_width(width: f64, passes: usize) -> f64 {
    width * passes as f64
}

/// Horizontal scroll position of the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    offset: f64,
    speed: f64,
    paused: bool,
}

impl ScrollState {
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0.0,
            speed,
            paused: false,
        }
    }

    /// Current translation, always in `(-span, 0]`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Moves one frame. Returns `true` if the offset wrapped to zero.
    pub fn step(&mut self, span: f64) -> bool {
        if self.paused {
            return false;
        }
        self.offset -= self.speed;
        if self.offset.abs() >= span {
            self.offset = 0.0;
            return true;
        }
        false
    }
}

/// Pause-on-hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Running,
    /// Paused while the pointer is over `card`.
    Paused { card: CardId },
}

/// Visible side effect of a hover event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    Focus(CardId),
    Blur(CardId),
    Switch { from: CardId, to: CardId },
}

/// Where the carousel writes its output.
pub trait StripSink {
    /// Translates the strip horizontally by `offset` pixels.
    fn apply_offset(&mut self, offset: f64);
    /// Adds or removes the focused marking on a rendered card.
    fn set_focused(&mut self, card: CardId, focused: bool);
}

/// Structural view of the element tree around the strip.
pub trait CardTree {
    type Node;

    /// The card id if `node` is itself a card.
    fn card_id(&self, node: &Self::Node) -> Option<CardId>;
    /// The enclosing node, or `None` at the top of the searchable tree.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
}

/// Resolves an event target to the nearest enclosing card.
pub fn resolve_card<T: CardTree>(tree: &T, target: T::Node) -> Option<CardId> {
    let mut node = Some(target);
    while let Some(current) = node {
        if let Some(id) = tree.card_id(&current) {
            return Some(id);
        }
        node = tree.parent(&current);
    }
    None
}

/// The carousel: strip geometry, scroll state and hover machine.
#[derive(Debug)]
pub struct CarouselEngine<S> {
    strip: Strip,
    scroll: ScrollState,
    hover: HoverState,
    running: bool,
    sink: S,
}

impl<S: StripSink> CarouselEngine<S> {
    pub fn new(strip: Strip, speed: f64, sink: S) -> Self {
        Self {
            strip,
            scroll: ScrollState::new(speed),
            hover: HoverState::Running,
            running: false,
            sink,
        }
    }

    pub fn strip(&self) -> &Strip {
        &self.strip
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Pointer moved onto `card` (already resolved from the event target).
    pub fn pointer_over(&mut self, card: Option<CardId>) -> Option<HoverTransition> {
        let card = card?;
        let transition = match self.hover {
            HoverState::Paused { card: current } if current == card => return None,
            HoverState::Paused { card: current } => {
                self.sink.set_focused(current, false);
                HoverTransition::Switch {
                    from: current,
                    to: card,
                }
            }
            HoverState::Running => HoverTransition::Focus(card),
        };
        self.sink.set_focused(card, true);
        self.hover = HoverState::Paused { card };
        self.scroll.paused = true;
        Some(transition)
    }

    /// Pointer left `left` for `entered`. Moving between nodes of the same
    /// card is not an exit.
    pub fn pointer_out(
        &mut self,
        left: Option<CardId>,
        entered: Option<CardId>,
    ) -> Option<HoverTransition> {
        let left = left?;
        if entered == Some(left) {
            return None;
        }
        match self.hover {
            HoverState::Paused { card } if card == left => {
                self.sink.set_focused(card, false);
                self.hover = HoverState::Running;
                self.scroll.paused = false;
                Some(HoverTransition::Blur(card))
            }
            _ => None,
        }
    }
}

impl<S: StripSink> Ticker for CarouselEngine<S> {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn on_frame(&mut self, _frame: &Frame<'_>) {
        if self.scroll.paused {
            return;
        }
        self.scroll.step(self.strip.loop_span());
        self.sink.apply_offset(self.scroll.offset);
    }
}
