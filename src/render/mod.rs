//! Rendering sinks for the notification manager.
//!
//! The manager never draws anything itself: every visible change of the
//! container is forwarded to a [`Renderer`]. This keeps the lifecycle logic
//! independent from where alerts end up being displayed.
//!
//! - [`Renderer`]: the trait the manager talks to
//! - [`TerminalRenderer`]: prints one line per event on the standard output

mod renderer;
mod terminal;

pub use crate::render::renderer::Renderer;
#[cfg(test)]
pub use crate::render::renderer::MockRenderer;
pub use crate::render::terminal::TerminalRenderer;
