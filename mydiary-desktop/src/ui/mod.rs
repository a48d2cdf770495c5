pub mod app;
pub mod card;
