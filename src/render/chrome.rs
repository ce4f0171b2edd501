//! Window Chrome
//!
//! Decorative title bars drawn above a rendered snippet: a macOS terminal
//! bar, a Windows command-prompt bar, or nothing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chrome style selected for a snippet
///
/// Closed enumeration; unrecognized names (including future values from
/// newer documents) fall back to [`ChromeStyle::MacOs`] so old renderers
/// keep producing a decoration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChromeStyle {
    #[default]
    MacOs,
    Windows10,
    None,
}

impl ChromeStyle {
    /// Parse a style name, falling back to the macOS chrome
    pub fn from_name(name: &str) -> Self {
        match name {
            "windows10" => Self::Windows10,
            "none" => Self::None,
            // "macos" and anything unrecognized
            _ => Self::MacOs,
        }
    }

    /// Stable name used in persisted documents and CSS class suffixes
    pub fn name(self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Windows10 => "windows10",
            Self::None => "none",
        }
    }
}

impl Serialize for ChromeStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ChromeStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Markup for the macOS terminal title bar (three window buttons)
const MACOS_TITLEBAR: &str = "<div class=\"window-titlebar window-titlebar--macos\">\
<span class=\"titlebar-button titlebar-button--close\"></span>\
<span class=\"titlebar-button titlebar-button--minimize\"></span>\
<span class=\"titlebar-button titlebar-button--zoom\"></span>\
</div>";

/// Markup for the Windows 10 command-prompt title bar
const WINDOWS10_TITLEBAR: &str = "<div class=\"window-titlebar window-titlebar--windows10\">\
<span class=\"titlebar-title\">Command Prompt</span>\
<span class=\"titlebar-controls\">\
<span class=\"titlebar-glyph titlebar-glyph--minimize\">&#x2500;</span>\
<span class=\"titlebar-glyph titlebar-glyph--maximize\">&#x25A1;</span>\
<span class=\"titlebar-glyph titlebar-glyph--close\">&#x2715;</span>\
</span>\
</div>";

/// Decoration markup for a chrome style, `None` when undecorated
pub fn render_chrome(style: ChromeStyle) -> Option<&'static str> {
    match style {
        ChromeStyle::MacOs => Some(MACOS_TITLEBAR),
        ChromeStyle::Windows10 => Some(WINDOWS10_TITLEBAR),
        ChromeStyle::None => None,
    }
}
