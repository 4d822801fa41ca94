// src/scrape/mod.rs
mod dashboard;
mod profile;
mod scrape;

pub use dashboard::extract_username;
pub use profile::{Levels, Sprites};
pub use profile::{extract_equipped_name, extract_levels, extract_progress, extract_sprite_urls};
pub use scrape::{SpriteSet, collect_sprites, collect_stats};
