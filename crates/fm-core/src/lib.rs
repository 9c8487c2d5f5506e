pub mod classify;
pub mod error;
pub mod geometry;
pub mod identity;
pub mod model;
pub mod parser;
pub mod process;

pub use classify::{ShapeIdentity, is_room_shape};
pub use error::{ParseError, ShapeError};
pub use geometry::estimate_bounds;
pub use identity::{describe, display_name, split_fragment};
pub use model::{Room, find_room};
pub use parser::parse_rooms;
pub use process::tag_rooms;
