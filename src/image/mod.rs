pub mod io;
pub mod traits;

pub use self::io::GrayImageU8;
pub use self::traits::{ImageView, ImageViewMut};
