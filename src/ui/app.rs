//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{SPLASH_DURATION_MS, TICK_RATE_MS};
use crate::menu;
use crate::stats::DashboardSource;
use crate::theme::ThemeMarker;
use crate::ui::shell::{NavigationShell, menu_hit, render_shell, shell_layout};
use crate::ui::splash::render_splash;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::debug;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    /// Path the shell opens on; unknown paths land on the dashboard.
    pub start_path: String,
    pub sidebar_open: bool,
    pub dark_mode: bool,
    pub with_background_color: bool,
    pub show_splash: bool,
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The navigation shell with the routed content.
    Shell(Box<NavigationShell>),
}

/// What the loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    ui_config: UIConfig,

    /// Where the dashboard view loads its statistics from.
    source: Arc<dyn DashboardSource>,

    marker: ThemeMarker,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("current_screen", &self.current_screen)
            .field("ui_config", &self.ui_config)
            .field("source", &self.source.name())
            .finish()
    }
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(ui_config: UIConfig, source: Arc<dyn DashboardSource>, marker: ThemeMarker) -> Self {
        Self {
            current_screen: Screen::Splash,
            ui_config,
            source,
            marker,
        }
    }

    /// Leaves the splash screen and mounts the shell.
    fn mount_shell(&mut self) {
        let shell = NavigationShell::mount(&self.ui_config, Arc::clone(&self.source), self.marker);
        self.current_screen = Screen::Shell(Box::new(shell));
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Applies one key press to the shell.
pub fn handle_key(shell: &mut NavigationShell, key: KeyEvent) -> Flow {
    if key.kind == KeyEventKind::Release {
        return Flow::Continue;
    }

    // While the path prompt is open, keys edit it.
    if shell.path_prompt().is_some() {
        match key.code {
            KeyCode::Esc => shell.cancel_path_prompt(),
            KeyCode::Enter => {
                if let Some(resolution) = shell.submit_path_prompt() {
                    debug!(
                        "Prompt navigated to {} (redirected: {})",
                        resolution.route.path, resolution.redirected
                    );
                }
            }
            KeyCode::Backspace => shell.pop_prompt_char(),
            KeyCode::Char(ch) => shell.push_prompt_char(ch),
            _ => {}
        }
        return Flow::Continue;
    }

    if is_quit(&key) {
        return Flow::Quit;
    }

    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            if let Some(entry) = menu::by_shortcut(ch) {
                shell.select(entry.id);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => shell.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => shell.select_next(),
        KeyCode::Char('b') => shell.toggle_sidebar(),
        KeyCode::Char('t') => shell.toggle_dark_mode(),
        KeyCode::Char('r') => {
            shell.retry_dashboard();
        }
        KeyCode::Char(':') => shell.open_path_prompt(),
        KeyCode::Backspace => {
            shell.go_back();
        }
        _ => {}
    }
    Flow::Continue
}

/// Applies one mouse event to the shell. `area` is the last drawn frame area.
pub fn handle_mouse(shell: &mut NavigationShell, mouse: MouseEvent, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let layout = shell_layout(area, shell.state().sidebar_open);
    if let Some(id) = menu_hit(&layout, mouse.column, mouse.row) {
        shell.select(id);
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);
    let tick_rate = Duration::from_millis(TICK_RATE_MS);

    if !app.ui_config.show_splash {
        app.mount_shell();
    }

    // UI event loop
    loop {
        if let Screen::Shell(shell) = &mut app.current_screen {
            shell.tick();
        }
        let frame_area = terminal.draw(|f| render(f, &app))?.area;

        // Handle splash-to-shell transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.mount_shell();
                continue;
            }
        }

        // Let the fetch task make progress between frames.
        tokio::task::yield_now().await;

        if !event::poll(tick_rate)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if matches!(app.current_screen, Screen::Splash) {
                    if is_quit(&key) {
                        return Ok(());
                    }
                    // Any other key skips the splash screen
                    app.mount_shell();
                } else if let Screen::Shell(shell) = &mut app.current_screen {
                    if handle_key(shell, key) == Flow::Quit {
                        return Ok(());
                    }
                }
            }
            Event::Mouse(mouse) => {
                if let Screen::Shell(shell) = &mut app.current_screen {
                    handle_mouse(shell, mouse, frame_area);
                }
            }
            _ => {}
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match &app.current_screen {
        Screen::Splash => render_splash(f, &app.marker.palette()),
        Screen::Shell(shell) => render_shell(f, shell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuId;
    use crate::router::DEFAULT_PATH;
    use crate::stats::MockPayloadSource;
    use crate::ui::shell::Content;
    use crossterm::event::KeyEventState;

    fn shell() -> NavigationShell {
        let config = UIConfig {
            start_path: DEFAULT_PATH.to_string(),
            sidebar_open: true,
            dark_mode: false,
            with_background_color: false,
            show_splash: false,
        };
        NavigationShell::mount(
            &config,
            Arc::new(MockPayloadSource::immediate()),
            ThemeMarker::isolated(),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[tokio::test]
    async fn digit_shortcuts_select_entries() {
        let mut shell = shell();
        assert_eq!(handle_key(&mut shell, press(KeyCode::Char('7'))), Flow::Continue);
        assert_eq!(shell.state().active_menu, MenuId::Complaints);
        handle_key(&mut shell, press(KeyCode::Char('0')));
        assert_eq!(shell.state().active_menu, MenuId::Settings);
    }

    #[tokio::test]
    async fn arrows_and_toggles() {
        let mut shell = shell();
        handle_key(&mut shell, press(KeyCode::Down));
        assert_eq!(shell.state().active_menu, MenuId::Users);
        handle_key(&mut shell, press(KeyCode::Char('k')));
        assert_eq!(shell.state().active_menu, MenuId::Dashboard);

        handle_key(&mut shell, press(KeyCode::Char('b')));
        assert!(!shell.state().sidebar_open);
        handle_key(&mut shell, press(KeyCode::Char('t')));
        assert!(shell.state().dark_mode);
        assert!(shell.marker().is_dark());
    }

    #[tokio::test]
    async fn release_events_are_ignored() {
        let mut shell = shell();
        let release = KeyEvent {
            code: KeyCode::Char('2'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut shell, release);
        assert_eq!(shell.state().active_menu, MenuId::Dashboard);
    }

    #[tokio::test]
    async fn quit_keys() {
        let mut shell = shell();
        assert_eq!(handle_key(&mut shell, press(KeyCode::Char('q'))), Flow::Quit);
        assert_eq!(handle_key(&mut shell, press(KeyCode::Esc)), Flow::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut shell, ctrl_c), Flow::Quit);
    }

    #[tokio::test]
    async fn prompt_captures_keys_until_enter() {
        let mut shell = shell();
        handle_key(&mut shell, press(KeyCode::Char(':')));
        for ch in "/settings".chars() {
            assert_eq!(handle_key(&mut shell, press(KeyCode::Char(ch))), Flow::Continue);
        }
        // 'q' and digits are text while the prompt is open
        assert_eq!(shell.state().active_menu, MenuId::Dashboard);
        handle_key(&mut shell, press(KeyCode::Enter));
        assert_eq!(shell.state().active_menu, MenuId::Settings);

        handle_key(&mut shell, press(KeyCode::Char(':')));
        handle_key(&mut shell, press(KeyCode::Char('x')));
        assert_eq!(handle_key(&mut shell, press(KeyCode::Esc)), Flow::Continue);
        assert!(shell.path_prompt().is_none());
        assert_eq!(shell.state().active_menu, MenuId::Settings);
    }

    #[tokio::test]
    async fn backspace_goes_back() {
        let mut shell = shell();
        handle_key(&mut shell, press(KeyCode::Char('3')));
        handle_key(&mut shell, press(KeyCode::Char('9')));
        handle_key(&mut shell, press(KeyCode::Backspace));
        assert_eq!(shell.state().active_menu, MenuId::Providers);
        assert!(matches!(shell.content(), Content::Placeholder(_)));
    }

    #[tokio::test]
    async fn clicking_a_sidebar_row_selects_it() {
        let mut shell = shell();
        let area = Rect::new(0, 0, 120, 40);
        let layout = shell_layout(area, true);
        let menu = layout.sidebar.unwrap().menu;
        let row = menu.y + crate::ui::shell::renderer::MENU_TOP_MARGIN + 4;

        handle_mouse(&mut shell, click(3, row), area);
        assert_eq!(shell.state().active_menu, MenuId::Connections);

        handle_mouse(&mut shell, click(80, row), area);
        assert_eq!(shell.state().active_menu, MenuId::Connections);
    }
}
