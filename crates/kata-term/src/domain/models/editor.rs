/// Configuration the workbench pushes at the text-editing widget. Mirrors
/// what the widget actually consumes: the buffer contents, the active theme
/// id, and the language it should highlight for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub value: String,
    pub theme: String,
    pub language: String,
}

/// Contract for the text-editing widget. The widget is an external
/// collaborator: the workbench owns the source of truth for the code buffer
/// and pushes it down via `render`, and reads edits back out with
/// `current_text` after each change event.
pub trait EditorWidget {
    fn render(&mut self, config: EditorConfig);
    fn current_text(&self) -> String;
}
