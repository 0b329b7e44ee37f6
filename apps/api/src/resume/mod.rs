// Resume projection: authored content in, render-ready view out.
// The projector is pure; handlers and the loader own everything that touches I/O.

pub mod handlers;
pub mod loader;
pub mod projector;
pub mod render;
