//! Display themes. Only a theme's name reaches the queue core, as the
//! context label for greeting prompts.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub background: &'static str,
    pub accent: &'static str,
}

pub const DEFAULT_THEME_ID: &str = "neon";

pub const THEMES: &[Theme] = &[
    Theme {
        id: "neon",
        name: "Neon City",
        background: "linear-gradient(-45deg, #FF3CAC, #784BA0, #2B86C5, #23d5ab)",
        accent: "#00f2fe",
    },
    Theme {
        id: "sunset",
        name: "Sunset Strip",
        background: "linear-gradient(-45deg, #FF512F, #DD2476, #F09819, #FF512F)",
        accent: "#FF512F",
    },
    Theme {
        id: "ocean",
        name: "Cyber Ocean",
        background: "linear-gradient(-45deg, #00c6ff, #0072ff, #1cb5e0, #000046)",
        accent: "#00c6ff",
    },
    Theme {
        id: "forest",
        name: "Toxic Jungle",
        background: "linear-gradient(-45deg, #11998e, #38ef7d, #00b09b, #96c93d)",
        accent: "#38ef7d",
    },
    Theme {
        id: "horror",
        name: "Midnight",
        background: "linear-gradient(-45deg, #2b0404, #850000, #1a0b0b, #000000)",
        accent: "#ff0000",
    },
];

pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id == id)
}

pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}
