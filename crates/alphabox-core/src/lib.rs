//! alphabox Core - content bounding box scanning
//!
//! This crate finds the smallest axis-aligned rectangle that contains every
//! pixel with non-zero alpha in a 32-bit premultiplied alpha-first bitmap,
//! working directly on the borrowed pixel words.
//!
//! # Module Structure
//!
//! - `layout` - Pixel layout configuration and the layout precondition
//! - `buffer` - Borrowed, strided pixel view consumed by the scanner
//! - `rect` - Result rectangle and the empty sentinel
//! - `bitmap` - Owned bitmap that produces buffers (fills, RGBA packing)
//! - `scan` - The scanner and its interchangeable strategies
//!
//! # Example
//!
//! ```ignore
//! use alphabox_core::{find_bounding_box, Bitmap, PixelLayout, Rect};
//!
//! let mut bitmap = Bitmap::new(1000, 1000, PixelLayout::PREMULTIPLIED_FIRST);
//! bitmap.fill_rect(Rect::new(200, 200, 600, 600), Bitmap::OPAQUE_BLACK);
//!
//! let bbox = find_bounding_box(&bitmap.as_buffer());
//! assert_eq!(bbox, Rect::new(200, 200, 600, 600));
//! ```

pub mod bitmap;
pub mod buffer;
pub mod layout;
pub mod rect;
pub mod scan;

pub use bitmap::{pack_premultiplied, Bitmap};
pub use buffer::{BufferError, PixelBuffer};
pub use layout::{alpha_of, check_layout, AlphaInfo, ByteOrder, LayoutError, PixelLayout};
pub use rect::Rect;
pub use scan::{find_bounding_box, find_bounding_box_with, Strategy};
