mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod geometry;
pub use geometry::*;

mod grid;
pub use grid::*;

mod header_footer;
pub use header_footer::*;

mod image;
pub use self::image::*;

/// The layouts a designer view can be created with
pub mod layout;
pub use layout::{Layout, UpdateReason, WorkflowLayout};

mod mapping;

mod margins;
pub use margins::*;

mod page;
pub use page::*;

/// Common paper sizes
pub mod pagesize;

mod paint;
pub use paint::*;

mod raster;
pub use raster::*;

mod rect;
pub use rect::*;

mod setup;
pub use setup::*;

mod theme;
pub use theme::*;

mod transform;
pub use transform::*;

mod view;
pub use view::*;

mod error;
pub use error::*;
