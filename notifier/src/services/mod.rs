pub mod holiday_source;
pub mod long_weekend;
pub mod notifier;
pub mod reminder;
pub mod subscriber_source;
