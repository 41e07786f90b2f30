mod renderer;
pub mod ui;

pub use renderer::Renderer;
