//! Pexels API model types.

mod collection;
mod filters;
mod media;
mod photo;
mod video;

pub use collection::*;
pub use filters::*;
pub use media::*;
pub use photo::*;
pub use video::*;
