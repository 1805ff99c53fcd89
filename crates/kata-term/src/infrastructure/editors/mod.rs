use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use tui_textarea::Input;
use tui_textarea::TextArea;

use super::themes::SharedThemeStore;
use crate::domain::models::EditorConfig;
use crate::domain::models::EditorWidget;
use crate::domain::models::ThemeDefinition;

/// Colors actually consumed from a theme definition. Anything the terminal
/// cannot express is ignored; highlighting internals are the widget's
/// business, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    background: Color,
    foreground: Color,
}

const DARK_PALETTE: Palette = Palette {
    background: Color::Rgb(30, 30, 30),
    foreground: Color::Rgb(212, 212, 212),
};

const LIGHT_PALETTE: Palette = Palette {
    background: Color::Rgb(255, 255, 254),
    foreground: Color::Rgb(0, 0, 0),
};

fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    return Some(Color::Rgb(r, g, b));
}

fn builtin_palette(id: &str) -> Option<Palette> {
    match id {
        "light" => Some(LIGHT_PALETTE),
        "vs-dark" => Some(DARK_PALETTE),
        _ => None,
    }
}

fn palette_from_definition(definition: &ThemeDefinition) -> Palette {
    let fallback = if definition.base == "vs" {
        LIGHT_PALETTE
    } else {
        DARK_PALETTE
    };

    return Palette {
        background: definition
            .colors
            .get("editor.background")
            .and_then(|e| parse_hex(e))
            .unwrap_or(fallback.background),
        foreground: definition
            .colors
            .get("editor.foreground")
            .and_then(|e| parse_hex(e))
            .unwrap_or(fallback.foreground),
    };
}

/// The terminal rendition of the text-editing widget: a textarea plus the
/// shared theme table the registry writes into.
pub struct TextareaEditor {
    textarea: TextArea<'static>,
    store: SharedThemeStore,
    config: EditorConfig,
}

impl TextareaEditor {
    pub fn new(store: SharedThemeStore, config: EditorConfig) -> TextareaEditor {
        let mut editor = TextareaEditor {
            textarea: TextArea::default(),
            store,
            config: EditorConfig {
                value: String::new(),
                theme: String::new(),
                language: String::new(),
            },
        };
        editor.render(config);

        return editor;
    }

    /// Feed one input event to the textarea. Returns whether the text
    /// changed, so the caller knows to sync the workbench buffer.
    pub fn input(&mut self, input: Input) -> bool {
        return self.textarea.input(input);
    }

    pub fn insert(&mut self, text: &str) {
        self.textarea.insert_str(text);
    }

    pub fn widget(&self) -> &TextArea<'static> {
        return &self.textarea;
    }

    fn palette(&self) -> Palette {
        if let Some(palette) = builtin_palette(&self.config.theme) {
            return palette;
        }

        if let Some(definition) = self.store.get(&self.config.theme) {
            return palette_from_definition(&definition);
        }

        // Not registered (yet); the widget falls back to its built-in dark.
        return DARK_PALETTE;
    }

    fn apply_style(&mut self) {
        let palette = self.palette();
        let base = Style::default()
            .fg(palette.foreground)
            .bg(palette.background);

        self.textarea.set_style(base);
        self.textarea.set_cursor_line_style(base);
        self.textarea.set_line_number_style(Style::default().fg(Color::DarkGray));
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.config.language)),
        );
    }
}

impl EditorWidget for TextareaEditor {
    fn render(&mut self, config: EditorConfig) {
        if config.value != self.current_text() {
            self.textarea = TextArea::from(config.value.lines());
        }

        self.config = config;
        self.apply_style();
    }

    fn current_text(&self) -> String {
        return self.textarea.lines().join("\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(value: &str, theme: &str) -> EditorConfig {
        return EditorConfig {
            value: value.to_string(),
            theme: theme.to_string(),
            language: "python".to_string(),
        };
    }

    #[test]
    fn test_render_pushes_the_buffer_into_the_widget() {
        let editor = TextareaEditor::new(SharedThemeStore::default(), config("print(1)", "vs-dark"));

        assert_eq!(editor.current_text(), "print(1)");
    }

    #[test]
    fn test_render_replaces_text_only_when_it_differs() {
        let mut editor = TextareaEditor::new(SharedThemeStore::default(), config("print(1)", "vs-dark"));

        editor.input(Input {
            key: tui_textarea::Key::Char('x'),
            ctrl: false,
            alt: false,
            shift: false,
        });
        let edited = editor.current_text();

        // Re-rendering with the same (edited) value keeps the widget as is.
        editor.render(config(&edited, "light"));
        assert_eq!(editor.current_text(), edited);

        // Rendering a different value resets the widget.
        editor.render(config("print(2)", "light"));
        assert_eq!(editor.current_text(), "print(2)");
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(parse_hex("#1B2B34"), Some(Color::Rgb(27, 43, 52)));
        assert_eq!(parse_hex("ffffff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("zzzzzz"), None);
    }

    #[test]
    fn test_palette_prefers_definition_colors_over_base_fallback() {
        let mut definition = ThemeDefinition::default();
        definition.base = "vs-dark".to_string();
        definition
            .colors
            .insert("editor.background".to_string(), "#1B2B34".to_string());

        let palette = palette_from_definition(&definition);
        assert_eq!(palette.background, Color::Rgb(27, 43, 52));
        assert_eq!(palette.foreground, DARK_PALETTE.foreground);
    }

    #[test]
    fn test_light_base_falls_back_to_the_light_palette() {
        let mut definition = ThemeDefinition::default();
        definition.base = "vs".to_string();

        assert_eq!(palette_from_definition(&definition), LIGHT_PALETTE);
    }
}
