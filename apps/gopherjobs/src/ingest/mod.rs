// Record loading: recursive directory walk, CSV decoding, positional column mapping.
// Classification happens later; loaded jobs carry both flags unset.

pub mod columns;
pub mod loader;
pub mod quoting;

pub use loader::load_jobs;
