mod extract;
mod renderer;

pub use extract::{extract_catalog, extract_image_url, extract_links};
pub use renderer::PageRenderer;
