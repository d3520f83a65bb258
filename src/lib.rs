pub mod constants;
pub mod data_types;
pub mod errors;
pub mod meal_extractor;
pub mod menu_fetcher;
pub mod message_formatter;
pub mod notification_sender;
