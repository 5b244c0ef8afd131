pub mod holiday;
pub mod notification;
pub mod weekend;
