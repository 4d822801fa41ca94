// src/scrape/scrape.rs
use std::path::Path;
use std::thread;

use super::profile;
use crate::core::net::{Client, FetchError};
use crate::stats::{ProfileStats, Progress};
use crate::store;

/// Fetched sprite bytes. Each side is independently best-effort.
#[derive(Clone, Debug, Default)]
pub struct SpriteSet {
    pub trainer: Option<Vec<u8>>,
    pub pet: Option<Vec<u8>>,
}

/// Fetch one profile page and run every extractor over it. Extractor misses
/// leave their field unknown; only the page fetch itself can fail.
pub fn collect_stats(client: &Client, username: &str) -> Result<ProfileStats, FetchError> {
    let page = client.fetch_profile_page(username)?;

    let levels = profile::extract_levels(&page);
    let sprites = profile::extract_sprite_urls(&page);

    let stats = ProfileStats {
        username: username.to_string(),
        trainer_level: levels.trainer,
        pet_level: levels.pet,
        progress: profile::extract_progress(&page).map(|raw| Progress::parse(&raw)),
        equipped_name: profile::extract_equipped_name(&page),
        trainer_sprite: sprites.trainer,
        pet_sprite: sprites.pet,
    };
    logf!(
        "Stats for {username}: {} field(s) populated",
        stats.populated_fields()
    );
    Ok(stats)
}

/// Fetch the discovered sprites, one worker per sprite. There is no ordering
/// requirement between them. A failed fetch falls back to the local sprite
/// store and otherwise silently drops the field; it never fails the sync.
pub fn collect_sprites(client: &Client, stats: &ProfileStats, sprites_dir: &Path) -> SpriteSet {
    let fetch_one = |path: Option<&str>| -> Option<Vec<u8>> {
        let path = path?;
        match client.fetch_asset(path) {
            Ok(bytes) => {
                if let Err(e) = store::save_sprite(sprites_dir, path, &bytes) {
                    logd!("Sprite cache write failed for {path}: {e}");
                }
                Some(bytes)
            }
            Err(e) => {
                loge!("Sprite fetch failed for {path}: {e}");
                store::load_sprite(sprites_dir, path)
            }
        }
    };

    thread::scope(|scope| {
        let trainer = scope.spawn(|| fetch_one(stats.trainer_sprite.as_deref()));
        let pet = scope.spawn(|| fetch_one(stats.pet_sprite.as_deref()));
        SpriteSet {
            trainer: trainer.join().unwrap_or(None),
            pet: pet.join().unwrap_or(None),
        }
    })
}
