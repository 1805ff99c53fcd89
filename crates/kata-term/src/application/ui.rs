use std::io;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::find_theme;
use crate::domain::models::theme_catalog;
use crate::domain::models::Action;
use crate::domain::models::EditorConfig;
use crate::domain::models::EditorWidget;
use crate::domain::models::Event;
use crate::domain::models::Notification;
use crate::domain::models::NotificationKind;
use crate::domain::models::RunKind;
use crate::domain::models::RunnerName;
use crate::domain::models::ThemeDescriptor;
use crate::domain::services::classifier;
use crate::domain::services::ActionsService;
use crate::domain::services::EventsService;
use crate::domain::services::ThemeRegistry;
use crate::domain::services::Workbench;
use crate::infrastructure::clients::RunnerClientManager;
use crate::infrastructure::editors::TextareaEditor;
use crate::infrastructure::notifications::ChannelNotifier;
use crate::infrastructure::themes::HttpThemeSource;
use crate::infrastructure::themes::SharedThemeStore;

struct Toast {
    notification: Notification,
    created: Instant,
}

impl Toast {
    fn new(notification: Notification) -> Toast {
        return Toast {
            notification,
            created: Instant::now(),
        };
    }

    fn expired(&self) -> bool {
        let ttl = Duration::from_millis(self.notification.auto_close_ms.unwrap_or(2000));
        return self.created.elapsed() >= ttl;
    }
}

/// Cleans up the terminal when tearing down from a panic, restoring the
/// shell to a usable state.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = execute!(io::stdout(), crossterm::cursor::Show);
}

fn next_theme(active: &ThemeDescriptor) -> ThemeDescriptor {
    let catalog = theme_catalog();
    let position = catalog.iter().position(|e| e.id == active.id).unwrap_or(0);
    return catalog[(position + 1) % catalog.len()].clone();
}

fn sync_editor(editor: &mut TextareaEditor, workbench: &Workbench) {
    editor.render(EditorConfig {
        value: workbench.code.clone(),
        theme: workbench.active_theme.id.clone(),
        language: Config::get(ConfigKey::Language),
    });
}

pub async fn start_loop() -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let theme_store = SharedThemeStore::default();
    let theme_registry = Arc::new(ThemeRegistry::new(
        Box::new(HttpThemeSource::new(Config::get(ConfigKey::ThemeURL))),
        Box::new(theme_store.clone()),
    ));
    let runner_client = RunnerClientManager::get(RunnerName::default())?;

    let mut workbench = Workbench::new(Box::new(ChannelNotifier::new(event_tx.clone())));

    // Kick off the configured theme. Non-built-ins commit once loaded.
    if let Some(descriptor) = find_theme(&Config::get(ConfigKey::Theme)) {
        if let Some(action) = workbench.select_theme(descriptor) {
            action_tx.send(action)?;
        }
    }

    let worker_event_tx = event_tx.clone();
    tokio::spawn(async move {
        if let Err(err) =
            ActionsService::start(runner_client, theme_registry, worker_event_tx, &mut action_rx)
                .await
        {
            tracing::error!(error = ?err, "actions worker stopped");
        }
    });

    enable_raw_mode()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut editor = TextareaEditor::new(
        theme_store,
        EditorConfig {
            value: workbench.code.clone(),
            theme: workbench.active_theme.id.clone(),
            language: Config::get(ConfigKey::Language),
        },
    );

    let mut events = EventsService::new(event_rx);
    let mut toasts: Vec<Toast> = vec![];
    let mut output_scroll: u16 = 0;

    loop {
        toasts.retain(|e| return !e.expired());
        terminal.draw(|frame| draw(frame, &workbench, &editor, &toasts, output_scroll))?;

        match events.next().await? {
            Event::KeyboardCTRLC => {
                break;
            }
            Event::KeyboardCTRLR => {
                if let Some(action) = workbench.trigger_run(RunKind::Execute) {
                    action_tx.send(action)?;
                }
            }
            Event::KeyboardCTRLS => {
                if let Some(action) = workbench.trigger_run(RunKind::Submit) {
                    action_tx.send(action)?;
                }
            }
            Event::KeyboardCTRLT => {
                if let Some(action) = workbench.select_theme(next_theme(&workbench.active_theme)) {
                    action_tx.send(action)?;
                }
                sync_editor(&mut editor, &workbench);
            }
            Event::KeyboardCharInput(input) => {
                if editor.input(input) {
                    workbench.update_code(&editor.current_text());
                    sync_editor(&mut editor, &workbench);
                }
            }
            Event::KeyboardPaste(text) => {
                editor.insert(&text);
                workbench.update_code(&editor.current_text());
            }
            Event::RunCompleted(kind, token, response) => {
                workbench.handle_run_completed(kind, token, response);
                output_scroll = 0;
            }
            Event::RunFailed(kind, token, err) => {
                workbench.handle_run_failed(kind, token, &err);
            }
            Event::ThemeCommitted(descriptor) => {
                workbench.handle_theme_committed(descriptor);
                sync_editor(&mut editor, &workbench);
            }
            Event::ThemeFailed(descriptor, err) => {
                workbench.handle_theme_failed(&descriptor, &err);
            }
            Event::Notify(notification) => {
                toasts.push(Toast::new(notification));
            }
            Event::UITick => {}
            Event::UIScrollUp => {
                output_scroll = output_scroll.saturating_sub(1);
            }
            Event::UIScrollDown => {
                output_scroll = output_scroll.saturating_add(1);
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}

fn draw(
    frame: &mut Frame,
    workbench: &Workbench,
    editor: &TextareaEditor,
    toasts: &[Toast],
    output_scroll: u16,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(frame.area());

    frame.render_widget(editor.widget(), columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(columns[1]);

    frame.render_widget(output_pane(workbench, output_scroll), right[0]);
    frame.render_widget(metrics_pane(workbench), right[1]);
    frame.render_widget(status_pane(workbench), right[2]);

    draw_toasts(frame, toasts);
}

fn output_pane(workbench: &Workbench, scroll: u16) -> Paragraph<'_> {
    let block = Block::default().borders(Borders::ALL).title(" Output ");

    match workbench.output.as_ref() {
        Some(state) => {
            let color = if state.is_success() {
                Color::Green
            } else {
                Color::Red
            };

            return Paragraph::new(state.body())
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0))
                .block(block);
        }
        None => return Paragraph::new("").block(block),
    }
}

fn metrics_pane(workbench: &Workbench) -> Paragraph<'static> {
    let mut lines: Vec<Line> = vec![];

    if let Some(state) = workbench.output.as_ref() {
        lines.push(Line::from(format!("Status: {}", state.status_description())));

        if let Some((memory, time)) = state.metrics() {
            lines.push(Line::from(format!(
                "Memory: {}",
                classifier::format_memory_usage(memory)
            )));
            lines.push(Line::from(format!(
                "Time: {}",
                classifier::format_time_taken(time)
            )));
        }
    }

    return Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Details "));
}

fn status_pane(workbench: &Workbench) -> Paragraph<'static> {
    let text = if workbench.busy {
        "Processing...".to_string()
    } else {
        format!(
            "^R run  ^S submit  ^T theme ({})  ^C quit",
            workbench.active_theme.display_name
        )
    };

    return Paragraph::new(text).block(Block::default().borders(Borders::ALL));
}

fn draw_toasts(frame: &mut Frame, toasts: &[Toast]) {
    let area = frame.area();

    for (index, toast) in toasts.iter().enumerate() {
        let width = (toast.notification.message.len() as u16 + 4).min(area.width);
        let height = 3u16;
        let y = area.y + (index as u16) * height;
        if y + height > area.bottom() {
            break;
        }

        let rect = Rect {
            x: area.right().saturating_sub(width),
            y,
            width,
            height,
        };
        let color = match toast.notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(toast.notification.message.clone())
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL)),
            rect,
        );
    }
}
