//! Folio Core Library
//!
//! Frame-driven effects for the folio site, free of any DOM dependency:
//! - `carousel`: infinite auto-scrolling project strip with hover pause
//! - `particle`: cursor trail and click sparkles
//! - `ticker`: per-frame scheduling shared by both engines
//!
//! The `form` and `country` modules hold the decision logic of the contact
//! form glue so the browser host only has to move values in and out of the DOM.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod carousel;
pub mod config;
pub mod country;
pub mod error;
pub mod form;
pub mod input;
pub mod particle;
pub mod ticker;

pub use carousel::{
    CardId, CardSlot, CardTree, CarouselEngine, HoverState, HoverTransition, ScrollState, Strip,
    StripSink, resolve_card,
};
pub use config::{
    CarouselConfig, ElementsConfig, FormConfig, FxConfig, ParticleConfig, RevealConfig,
    RevealGroup, SpawnProfile,
};
pub use country::{dial_code, matches_search, sort_by_dial_code};
pub use error::FxError;
pub use form::{ContactForm, FormStatus, digits_only};
pub use input::{InputState, KeyAction, OFFSCREEN_SENTINEL, Point};
pub use particle::{Particle, ParticleEngine, Rgb, Surface};
pub use ticker::{Frame, FrameDriver, SharedTicker, Ticker};
