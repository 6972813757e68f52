//! Pure HTML extraction against steamcommunity.com markup. The element ids,
//! classes and inline attribute formats here are undocumented and may change
//! without notice; every extractor degrades to an empty result instead of
//! failing.

pub(crate) mod catalog;
pub(crate) mod image;
pub(crate) mod links;

pub use catalog::extract_catalog;
pub use image::extract_image_url;
pub use links::extract_links;
