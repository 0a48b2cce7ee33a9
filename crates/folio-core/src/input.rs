//! Pointer and keyboard state shared with the per-frame tickers.

/// Pointer x-coordinates at or below this value mean "not over the page".
pub const OFFSCREEN_SENTINEL: f64 = -100.0;

/// Where the pointer is assumed to be before the first move event.
const INITIAL_POINTER: Point = Point::new(-200.0, -200.0);

/// A position in client (viewport) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Latest pointer state, written by the move handler and read by tickers.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    pointer: Point,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pointer: INITIAL_POINTER,
        }
    }

    /// Records a pointer move.
    pub fn move_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Point::new(x, y);
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Returns the pointer position if it is over the visible canvas.
    pub fn pointer_on_canvas(&self) -> Option<Point> {
        (self.pointer.x > OFFSCREEN_SENTINEL).then_some(self.pointer)
    }
}

/// What a keydown means to the effects layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Keyboard navigation started: hide the custom cursor and its trail.
    HideCursor,
}

impl KeyAction {
    /// Maps a `KeyboardEvent.key` value to an action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Tab" => Some(Self::HideCursor),
            _ => None,
        }
    }
}
