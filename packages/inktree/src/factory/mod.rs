//! Renderer factory system for tag-to-renderer dispatch.
//!
//! The factory resolves element tags to fresh renderer instances using a
//! mapping seeded at construction time. Mapping providers can be swapped to
//! customize or extend the supported vocabulary without touching the
//! tree-walking logic.

mod config;
mod core;
mod mapper;

pub use self::config::DefaultRendererMapper;
pub use self::core::RendererFactory;
pub use self::mapper::{constructor_of, ConstructorError, RendererConstructor, RendererMapper};
