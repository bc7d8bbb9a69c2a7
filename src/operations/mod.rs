pub mod creation;
pub mod projection;
pub mod transform;
