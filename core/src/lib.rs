//! The probing engine behind `pingr`.
//!
//! * [`probe`]: the [`Prober`](probe::Prober) abstraction and the system `ping` backed prober.
//! * [`runner`]: bounded-concurrency rounds and the continuous loop.
//! * [`system`], [`hosts`], [`store`]: adapter discovery, host files and result files.

use std::path::Path;

pub mod hosts;
pub mod probe;
pub mod runner;
pub mod store;
pub mod system;

pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
