pub mod deck;
pub mod markdown;
