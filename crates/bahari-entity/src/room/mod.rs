//! Room catalog domain.

pub mod amenities;
pub mod model;

pub use amenities::{amenities_to_column, parse_amenities};
pub use model::{CreateRoom, Room, RoomRow, UpdateRoom};
