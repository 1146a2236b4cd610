mod plotters_renderer;

pub use self::plotters_renderer::*;
