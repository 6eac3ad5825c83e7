//! Tool adapters for Heymark
//!
//! Provides the adapter contract, the shared output layouts, the registry,
//! and all built-in tool implementations.

pub mod frontmatter;
pub mod implementations;
pub mod layout;
pub mod registry;

pub use implementations::register_builtin_tools;
pub use layout::{CleanStrategy, Layout, Shape};
pub use registry::{LayoutTool, ToolAdapter, ToolRegistry};
