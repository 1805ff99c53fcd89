use std::collections::HashMap;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Theme ids whose definitions ship with the editor widget itself. These
/// never go through the registry and are always considered loaded.
pub const BUILTIN_THEMES: [&str; 2] = ["light", "vs-dark"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub id: String,
    pub display_name: String,
}

impl ThemeDescriptor {
    fn new(id: &str, display_name: &str) -> ThemeDescriptor {
        return ThemeDescriptor {
            id: id.to_string(),
            display_name: display_name.to_string(),
        };
    }

    pub fn is_builtin(&self) -> bool {
        return BUILTIN_THEMES.contains(&self.id.as_str());
    }
}

/// A fetched theme document. The format follows the upstream theme
/// repository; unknown fields are ignored and everything is defaulted so a
/// sparse document still registers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub inherit: bool,
    #[serde(default)]
    pub rules: Vec<TokenRule>,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenRule {
    #[serde(default)]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, rename = "fontStyle", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

/// Fetch/parse failure for a theme definition. Cloneable so every waiter on
/// a single in-flight load receives the same outcome.
#[derive(Error, Debug, Clone)]
pub enum ThemeLoadError {
    #[error("theme '{id}' could not be fetched: {message}")]
    Fetch { id: String, message: String },
    #[error("theme '{id}' fetch returned HTTP {status}")]
    Status { id: String, status: u16 },
    #[error("theme '{id}' definition could not be parsed: {message}")]
    Parse { id: String, message: String },
}

/// Where theme definitions come from.
#[async_trait]
pub trait ThemeSource: Send + Sync {
    async fn fetch(&self, descriptor: &ThemeDescriptor) -> Result<ThemeDefinition, ThemeLoadError>;
}

pub type ThemeSourceBox = Box<dyn ThemeSource>;

/// Where loaded definitions are registered, i.e. the editor widget's theme
/// table. Registration must happen before a theme is reported as loaded.
pub trait ThemeRegistrar: Send + Sync {
    fn register(&self, id: &str, definition: ThemeDefinition);
}

pub type ThemeRegistrarBox = Box<dyn ThemeRegistrar>;

static CATALOG: Lazy<Vec<ThemeDescriptor>> = Lazy::new(|| {
    return vec![
        ThemeDescriptor::new("light", "Light (Visual Studio)"),
        ThemeDescriptor::new("vs-dark", "Dark (Visual Studio)"),
        ThemeDescriptor::new("active4d", "Active4D"),
        ThemeDescriptor::new("all-hallows-eve", "All Hallows Eve"),
        ThemeDescriptor::new("amy", "Amy"),
        ThemeDescriptor::new("birds-of-paradise", "Birds of Paradise"),
        ThemeDescriptor::new("blackboard", "Blackboard"),
        ThemeDescriptor::new("brilliance-black", "Brilliance Black"),
        ThemeDescriptor::new("brilliance-dim", "Brilliance Dim"),
        ThemeDescriptor::new("chrome-devtools", "Chrome DevTools"),
        ThemeDescriptor::new("clouds-midnight", "Clouds Midnight"),
        ThemeDescriptor::new("clouds", "Clouds"),
        ThemeDescriptor::new("cobalt", "Cobalt"),
        ThemeDescriptor::new("cobalt2", "Cobalt2"),
        ThemeDescriptor::new("dawn", "Dawn"),
        ThemeDescriptor::new("dracula", "Dracula"),
        ThemeDescriptor::new("dreamweaver", "Dreamweaver"),
        ThemeDescriptor::new("eiffel", "Eiffel"),
        ThemeDescriptor::new("espresso-libre", "Espresso Libre"),
        ThemeDescriptor::new("github", "GitHub"),
        ThemeDescriptor::new("idle", "IDLE"),
        ThemeDescriptor::new("katzenmilch", "Katzenmilch"),
        ThemeDescriptor::new("kuroir-theme", "Kuroir Theme"),
        ThemeDescriptor::new("lazy", "LAZY"),
        ThemeDescriptor::new("merbivore-soft", "Merbivore Soft"),
        ThemeDescriptor::new("merbivore", "Merbivore"),
        ThemeDescriptor::new("monokai-bright", "Monokai Bright"),
        ThemeDescriptor::new("monokai", "Monokai"),
        ThemeDescriptor::new("night-owl", "Night Owl"),
        ThemeDescriptor::new("nord", "Nord"),
        ThemeDescriptor::new("oceanic-next", "Oceanic Next"),
        ThemeDescriptor::new("pastels-on-dark", "Pastels on Dark"),
        ThemeDescriptor::new("slush-and-poppies", "Slush and Poppies"),
        ThemeDescriptor::new("solarized-dark", "Solarized-dark"),
        ThemeDescriptor::new("solarized-light", "Solarized-light"),
        ThemeDescriptor::new("spacecadet", "SpaceCadet"),
        ThemeDescriptor::new("sunburst", "Sunburst"),
        ThemeDescriptor::new("tomorrow-night", "Tomorrow-Night"),
        ThemeDescriptor::new("tomorrow", "Tomorrow"),
        ThemeDescriptor::new("twilight", "Twilight"),
        ThemeDescriptor::new("vibrant-ink", "Vibrant Ink"),
        ThemeDescriptor::new("xcode-default", "Xcode_default"),
        ThemeDescriptor::new("zenburnesque", "Zenburnesque"),
    ];
});

/// The static catalog, in insertion order. Listing never triggers a load.
pub fn theme_catalog() -> &'static [ThemeDescriptor] {
    return &CATALOG;
}

pub fn find_theme(id: &str) -> Option<ThemeDescriptor> {
    return CATALOG.iter().find(|e| e.id == id).cloned();
}
