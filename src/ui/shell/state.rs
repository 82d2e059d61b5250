//! Navigation shell state
//!
//! Owns the navigation flags, the router, the theme marker handle and the
//! mounted content view. Everything the sidebar and top bar show is read from
//! here.

use crate::consts::cli_consts::NOTIFICATION_SEED;
use crate::menu::{self, MENU, MenuEntry, MenuId};
use crate::router::{Resolution, Route, Router, ViewKind, route_for};
use crate::stats::DashboardSource;
use crate::theme::{Palette, ThemeMarker};
use crate::ui::app::UIConfig;
use crate::ui::dashboard::DashboardView;
use crate::ui::placeholder::FeaturePlaceholder;
use log::{debug, info};
use std::sync::Arc;

/// Flags owned by the shell and read by its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active_menu: MenuId,
    pub sidebar_open: bool,
    pub dark_mode: bool,
    /// Seeded at mount; nothing updates it yet.
    pub notification_count: u32,
}

/// The view mounted in the content area.
#[derive(Debug)]
pub enum Content {
    Dashboard(DashboardView),
    Placeholder(&'static FeaturePlaceholder),
}

impl Content {
    fn mount(view: ViewKind, source: &Arc<dyn DashboardSource>) -> Self {
        match view {
            ViewKind::Dashboard => Content::Dashboard(DashboardView::mount(Arc::clone(source))),
            ViewKind::Placeholder(placeholder) => Content::Placeholder(placeholder),
        }
    }
}

pub struct NavigationShell {
    state: NavigationState,
    router: Router,
    content: Content,
    source: Arc<dyn DashboardSource>,
    marker: ThemeMarker,
    /// Text typed into the go-to-path prompt, when it is open.
    path_prompt: Option<String>,
    /// Whether to paint the palette background behind every panel.
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl std::fmt::Debug for NavigationShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationShell")
            .field("state", &self.state)
            .field("route", &self.router.current().path)
            .field("content", &self.content)
            .field("source", &self.source.name())
            .finish()
    }
}

impl NavigationShell {
    /// Mounts the shell: applies the initial theme marker, resolves the start
    /// path and mounts its view. Must be called inside a tokio runtime.
    pub fn mount(
        ui_config: &UIConfig,
        source: Arc<dyn DashboardSource>,
        marker: ThemeMarker,
    ) -> Self {
        marker.apply(ui_config.dark_mode);

        let router = Router::starting_at(&ui_config.start_path);
        let route = router.current();
        let content = Content::mount(route.view, &source);
        info!(
            "Shell mounted on {} (sidebar open: {}, dark mode: {})",
            route.path, ui_config.sidebar_open, ui_config.dark_mode
        );

        Self {
            state: NavigationState {
                active_menu: route.menu,
                sidebar_open: ui_config.sidebar_open,
                dark_mode: ui_config.dark_mode,
                notification_count: NOTIFICATION_SEED,
            },
            router,
            content,
            source,
            marker,
            path_prompt: None,
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn current_route(&self) -> &'static Route {
        self.router.current()
    }

    pub fn active_entry(&self) -> &'static MenuEntry {
        self.state.active_menu.entry()
    }

    pub fn palette(&self) -> Palette {
        self.marker.palette()
    }

    pub fn marker(&self) -> ThemeMarker {
        self.marker
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.sidebar_open = !self.state.sidebar_open;
        debug!("Sidebar open: {}", self.state.sidebar_open);
    }

    /// Flips dark mode and keeps the theme marker in step with it.
    pub fn toggle_dark_mode(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
        self.marker.apply(self.state.dark_mode);
        debug!("Dark mode: {}", self.state.dark_mode);
    }

    /// Selects a menu entry by string id. Unknown ids are ignored.
    pub fn select_menu(&mut self, id: &str) -> bool {
        match menu::find(id) {
            Some(entry) => {
                self.select(entry.id);
                true
            }
            None => {
                debug!("Ignoring unknown menu id {:?}", id);
                false
            }
        }
    }

    /// Selects a menu entry and shows its route.
    pub fn select(&mut self, id: MenuId) {
        self.navigate(route_for(id).path);
    }

    /// Selects the entry after the active one, wrapping around.
    pub fn select_next(&mut self) {
        let next = (self.state.active_menu.position() + 1) % MENU.len();
        self.select(MENU[next].id);
    }

    /// Selects the entry before the active one, wrapping around.
    pub fn select_previous(&mut self) {
        let position = self.state.active_menu.position();
        let previous = (position + MENU.len() - 1) % MENU.len();
        self.select(MENU[previous].id);
    }

    /// Routes to `path`; unknown paths land on the default route.
    pub fn navigate(&mut self, path: &str) -> Resolution {
        let previous = self.router.current();
        let resolution = self.router.navigate(path);
        self.sync_route(previous);
        resolution
    }

    /// Goes back one history entry. Returns false when already at the oldest.
    pub fn go_back(&mut self) -> bool {
        let previous = self.router.current();
        if self.router.back() {
            self.sync_route(previous);
            true
        } else {
            false
        }
    }

    fn sync_route(&mut self, previous: &'static Route) {
        let current = self.router.current();
        self.state.active_menu = current.menu;
        if current != previous {
            debug!("Mounting view for {}", current.path);
            // Replacing the content drops (unmounts) the previous view.
            self.content = Content::mount(current.view, &self.source);
        }
    }

    /// Advances animations and picks up a finished dashboard fetch.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if let Content::Dashboard(view) = &mut self.content {
            view.poll();
        }
    }

    /// Retries a failed dashboard load. No-op elsewhere.
    pub fn retry_dashboard(&mut self) -> bool {
        match &mut self.content {
            Content::Dashboard(view) => view.retry(),
            Content::Placeholder(_) => false,
        }
    }

    pub fn path_prompt(&self) -> Option<&str> {
        self.path_prompt.as_deref()
    }

    pub fn open_path_prompt(&mut self) {
        self.path_prompt = Some(String::new());
    }

    pub fn cancel_path_prompt(&mut self) {
        self.path_prompt = None;
    }

    pub fn push_prompt_char(&mut self, ch: char) {
        if let Some(prompt) = self.path_prompt.as_mut() {
            prompt.push(ch);
        }
    }

    pub fn pop_prompt_char(&mut self) {
        if let Some(prompt) = self.path_prompt.as_mut() {
            prompt.pop();
        }
    }

    /// Closes the prompt and navigates to what was typed.
    pub fn submit_path_prompt(&mut self) -> Option<Resolution> {
        let path = self.path_prompt.take()?;
        Some(self.navigate(&path))
    }
}

impl Drop for NavigationShell {
    fn drop(&mut self) {
        self.marker.clear();
    }
}
