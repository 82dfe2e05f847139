pub mod f32;
pub mod io;
pub mod rgb8;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::io::{load_rgb_image, save_edge_map, save_grayscale_f32, write_json_file, RgbFrame};
pub use self::rgb8::ImageRgb8;
pub use self::traits::{ImageView, ImageViewMut, Rows};
