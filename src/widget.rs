// src/widget.rs

// Deck-browser widget markup. Rendering is a pure function of the stats
// record, sprite bytes and theme; the host embeds the returned string in
// its stats area.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::config::consts::SERVICE_ORIGIN;
use crate::core::sanitize::{escape_html, normalize_entities};
use crate::scrape::SpriteSet;
use crate::stats::{ProfileStats, Progress};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

struct Palette {
    bg: &'static str,
    text: &'static str,
    stat_bg: &'static str,
}

impl Theme {
    fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                bg: "#FAF8F2",
                text: "#242424",
                stat_bg: "#E3E2DC",
            },
            Theme::Dark => Palette {
                bg: "#242424",
                text: "#FAF8F2",
                stat_bg: "#202020",
            },
        }
    }
}

fn widget_css(theme: Theme) -> String {
    let p = theme.palette();
    format!(
        "#focumon-widget{{width:200px;height:200px;border-radius:20px;\
background:{bg};color:{text};padding:12px;overflow:hidden}}\
#focumon-widget .stat-row{{display:flex;justify-content:space-between;\
background:{stat_bg};padding:8px 10px;border-radius:16px}}\
#focumon-widget .sprite{{width:60px;height:60px;image-rendering:pixelated}}\
#focumon-widget .no-stats{{text-align:center;opacity:0.9;margin-top:20px}}",
        bg = p.bg,
        text = p.text,
        stat_bg = p.stat_bg,
    )
}

fn sprite_img(class: &str, bytes: Option<&[u8]>, path: Option<&str>) -> Option<String> {
    let src = match (bytes, path) {
        (Some(b), _) => format!("data:image/png;base64,{}", BASE64.encode(b)),
        (None, Some(p)) => format!("{SERVICE_ORIGIN}{}", escape_html(p)),
        (None, None) => return None,
    };
    Some(format!(r#"<img class="sprite {class}" src="{src}" alt="">"#))
}

fn stat_row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="stat-row"><span class="stat-label">{label}</span><span class="stat-value">{value}</span></div>"#
    )
}

fn progress_row(progress: &Progress) -> String {
    match progress {
        // Two clean integers render a bar; anything else falls back to the
        // literal text.
        Progress::Fraction { current, total } => format!(
            r#"<div class="stat-row"><span class="stat-label">Focudex</span><progress class="focudex-bar" value="{current}" max="{total}"></progress><span class="stat-value">{current}/{total}</span></div>"#
        ),
        Progress::Literal(text) => stat_row("Focudex", &escape_html(text)),
    }
}

fn placeholder_body() -> String {
    r#"<div id="focumon-widget"><div class="no-stats">Pair your username<br>on Settings<br>by clicking the gear icon</div></div>"#
        .to_string()
}

fn widget_body(stats: &ProfileStats, sprites: Option<&SpriteSet>) -> String {
    let mut parts = Vec::new();

    parts.push(format!(
        r#"<div class="widget-username">{}</div>"#,
        escape_html(&stats.username)
    ));

    let trainer_img = sprite_img(
        "trainer",
        sprites.and_then(|s| s.trainer.as_deref()),
        stats.trainer_sprite.as_deref(),
    );
    let pet_img = sprite_img(
        "focumon",
        sprites.and_then(|s| s.pet.as_deref()),
        stats.pet_sprite.as_deref(),
    );
    if trainer_img.is_some() || pet_img.is_some() {
        let mut block = String::from(r#"<div class="sprites-container">"#);
        if let Some(img) = trainer_img {
            block.push_str(&img);
        }
        if let Some(img) = pet_img {
            block.push_str(&img);
        }
        block.push_str("</div>");
        parts.push(block);
    }

    parts.push(r#"<div class="widget-content">"#.to_string());
    if let Some(level) = stats.trainer_level {
        parts.push(stat_row("Level", &format!("LV.{level}")));
    }
    // Entity-decode before escaping so "&amp;" in page text does not
    // double-encode.
    match (&stats.equipped_name, stats.pet_level) {
        (Some(name), Some(level)) => {
            let name = escape_html(&normalize_entities(name));
            parts.push(stat_row("Focumon", &format!("{name} LV.{level}")));
        }
        (Some(name), None) => {
            parts.push(stat_row("Focumon", &escape_html(&normalize_entities(name))));
        }
        (None, Some(level)) => parts.push(stat_row("Focumon", &format!("LV.{level}"))),
        (None, None) => {}
    }
    if let Some(progress) = &stats.progress {
        parts.push(progress_row(progress));
    }
    parts.push("</div>".to_string());

    format!(r#"<div id="focumon-widget">{}</div>"#, parts.concat())
}

/// Render the complete widget block. Stats with fewer than two known fields
/// (or none at all) render the pairing placeholder instead.
pub fn render_widget(
    stats: Option<&ProfileStats>,
    sprites: Option<&SpriteSet>,
    theme: Theme,
) -> String {
    let body = match stats {
        Some(s) if s.has_displayable_stats() => widget_body(s, sprites),
        _ => placeholder_body(),
    };
    format!(
        "<div id='focumon-widget-container'><style>{}</style>{}</div>",
        widget_css(theme),
        body
    )
}

struct CachedMarkup {
    theme: Theme,
    markup: String,
}

/// Single-slot cache for the rendered widget. The slot does not watch its
/// inputs: collaborators call `invalidate` on sync completion, view
/// teardown or settings change. A theme switch re-renders by itself.
#[derive(Default)]
pub struct MarkupCache {
    slot: Option<CachedMarkup>,
}

impl MarkupCache {
    pub const fn new() -> Self {
        Self { slot: None }
    }

    pub fn is_cached(&self) -> bool {
        self.slot.is_some()
    }

    pub fn get_or_render(
        &mut self,
        stats: Option<&ProfileStats>,
        sprites: Option<&SpriteSet>,
        theme: Theme,
    ) -> &str {
        if self.slot.as_ref().map(|c| c.theme) != Some(theme) {
            self.slot = Some(CachedMarkup {
                theme,
                markup: render_widget(stats, sprites, theme),
            });
        }
        match &self.slot {
            Some(cached) => &cached.markup,
            None => "",
        }
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
