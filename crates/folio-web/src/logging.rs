//! Tracing setup for the browser console.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

/// Installs the panic hook and a console-backed tracing subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init() {
    console_error_panic_hook::set_once();

    let filter = EnvFilter::new("info,folio_core=info,folio_web=info");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
