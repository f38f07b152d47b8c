//! Configuration loading and resolution utilities.
//!
//! Values are layered from default config files, explicit `--config` files,
//! `CHIPZ__SECTION__KEY` environment variables, and CLI flags, in increasing
//! order of precedence. `load` is the primary entry point and returns a
//! validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
