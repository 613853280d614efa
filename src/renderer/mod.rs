pub mod encoder;
pub mod palette;
pub mod raster;

pub use encoder::save_png;
pub use raster::Raster;
