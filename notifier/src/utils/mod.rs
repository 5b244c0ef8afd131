pub mod email;
pub mod template;
pub mod time;

pub use time::*;
