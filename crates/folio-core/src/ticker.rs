//! Per-frame scheduling.
//!
//! The host calls [`FrameDriver::advance`] once per animation frame; the
//! driver forwards the frame to every running [`Ticker`]. Tickers share no
//! state and run in registration order.

use std::cell::RefCell;
use std::rc::Rc;

use crate::input::InputState;

/// One animation frame as seen by a ticker.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Frames advanced since the driver was created, starting at 1.
    pub count: u64,
    /// Milliseconds since the previous frame (0 on the first frame).
    pub delta_ms: f64,
    pub input: &'a InputState,
}

/// Something that updates once per animation frame.
pub trait Ticker {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
    fn on_frame(&mut self, frame: &Frame<'_>);
}

/// Shared handle to a ticker owned by the driver and by event handlers.
pub type SharedTicker = Rc<RefCell<dyn Ticker>>;

/// Owns the lifecycle of a set of tickers.
#[derive(Default)]
pub struct FrameDriver {
    tickers: Vec<SharedTicker>,
    frame_count: u64,
    last_timestamp: Option<f64>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a ticker. It is not started.
    pub fn register(&mut self, ticker: SharedTicker) {
        self.tickers.push(ticker);
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn start_all(&mut self) {
        for ticker in &self.tickers {
            ticker.borrow_mut().start();
        }
    }

    /// Stops every ticker and forgets the frame timestamp, so the next
    /// frame after a restart reports a zero delta.
    pub fn stop_all(&mut self) {
        for ticker in &self.tickers {
            ticker.borrow_mut().stop();
        }
        self.last_timestamp = None;
    }

    /// Advances one frame at `timestamp_ms` (the host's frame clock).
    pub fn advance(&mut self, timestamp_ms: f64, input: &InputState) {
        self.frame_count += 1;
        let delta_ms = self
            .last_timestamp
            .map_or(0.0, |last| (timestamp_ms - last).max(0.0));
        self.last_timestamp = Some(timestamp_ms);

        let frame = Frame {
            count: self.frame_count,
            delta_ms,
            input,
        };
        for ticker in &self.tickers {
            let mut ticker = ticker.borrow_mut();
            if ticker.is_running() {
                ticker.on_frame(&frame);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        running: bool,
        frames: Vec<(u64, f64)>,
    }

    impl Ticker for Counter {
        fn start(&mut self) {
            self.running = true;
        }

        fn stop(&mut self) {
            self.running = false;
        }

        fn is_running(&self) -> bool {
            self.running
        }

        fn on_frame(&mut self, frame: &Frame<'_>) {
            self.frames.push((frame.count, frame.delta_ms));
        }
    }

    #[test]
    fn test_registered_tickers_wait_for_start() {
        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut driver = FrameDriver::new();
        driver.register(counter.clone());

        driver.advance(0.0, &InputState::new());
        assert!(counter.borrow().frames.is_empty());

        driver.start_all();
        driver.advance(16.0, &InputState::new());
        assert_eq!(counter.borrow().frames.len(), 1);
    }

    #[test]
    fn test_frame_count_and_delta() {
        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut driver = FrameDriver::new();
        driver.register(counter.clone());
        driver.start_all();

        let input = InputState::new();
        driver.advance(100.0, &input);
        driver.advance(116.0, &input);
        driver.advance(150.0, &input);

        assert_eq!(
            counter.borrow().frames,
            vec![(1, 0.0), (2, 16.0), (3, 34.0)]
        );
        assert_eq!(driver.frame_count(), 3);
    }

    #[test]
    fn test_stop_halts_every_ticker() {
        let a = Rc::new(RefCell::new(Counter::default()));
        let b = Rc::new(RefCell::new(Counter::default()));
        let mut driver = FrameDriver::new();
        driver.register(a.clone());
        driver.register(b.clone());
        driver.start_all();

        let input = InputState::new();
        driver.advance(0.0, &input);
        driver.stop_all();
        driver.advance(16.0, &input);

        assert_eq!(a.borrow().frames.len(), 1);
        assert_eq!(b.borrow().frames.len(), 1);
        assert!(!a.borrow().is_running());
    }

    #[test]
    fn test_restart_resets_delta() {
        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut driver = FrameDriver::new();
        driver.register(counter.clone());
        driver.start_all();

        let input = InputState::new();
        driver.advance(0.0, &input);
        driver.stop_all();
        driver.start_all();
        driver.advance(5000.0, &input);

        assert_eq!(counter.borrow().frames[1], (2, 0.0));
    }
}
