//! Folio Web
//!
//! Browser host for the site effects: binds the `folio-core` engines to the
//! page's DOM, drives them from `requestAnimationFrame` and wires the
//! contact form glue.
//!
//! Everything here is wasm32-only; on other targets the crate is empty so the
//! workspace still builds and tests natively.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod carousel;
#[cfg(target_arch = "wasm32")]
mod contact;
#[cfg(target_arch = "wasm32")]
mod cursor;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod entry;
#[cfg(target_arch = "wasm32")]
mod error;
#[cfg(target_arch = "wasm32")]
mod frame_loop;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod reveal;

#[cfg(target_arch = "wasm32")]
pub use app::App;
#[cfg(target_arch = "wasm32")]
pub use carousel::DomCardTree;
#[cfg(target_arch = "wasm32")]
pub use entry::{start, stop_effects};
#[cfg(target_arch = "wasm32")]
pub use error::WebError;
