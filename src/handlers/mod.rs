pub mod brain;
pub mod diary;
pub mod entries;
pub mod health;
pub mod risk;
pub mod stats;
pub mod voice;
