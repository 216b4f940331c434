pub mod context;
pub mod page;

// Re-export main types
pub use context::RenderContext;
pub use page::render_page;
