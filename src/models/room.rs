//! Room model.

use serde::{Deserialize, Serialize};

/// A teaching room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier (e.g. "R105", "L2").
    pub room_id: String,
    /// Room classification (e.g. "Lecture", "Lab").
    pub room_type: String,
    /// Seating capacity.
    pub capacity: u32,
}

impl Room {
    /// Creates a room.
    pub fn new(room_id: impl Into<String>, room_type: impl Into<String>, capacity: u32) -> Self {
        Self {
            room_id: room_id.into(),
            room_type: room_type.into(),
            capacity,
        }
    }
}
