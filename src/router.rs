//! Path routing
//!
//! Static path table plus a small back history. Unknown paths resolve to the
//! default route in a single hop.

use crate::consts::cli_consts::MAX_ROUTE_HISTORY;
use crate::menu::MenuId;
use crate::ui::placeholder::{self, FeaturePlaceholder};
use log::debug;

/// Path every unknown path is redirected to.
pub const DEFAULT_PATH: &str = "/";

/// What the content area shows for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Placeholder(&'static FeaturePlaceholder),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub menu: MenuId,
    pub view: ViewKind,
}

pub static ROUTES: [Route; 10] = [
    Route {
        path: "/",
        menu: MenuId::Dashboard,
        view: ViewKind::Dashboard,
    },
    Route {
        path: "/users",
        menu: MenuId::Users,
        view: ViewKind::Placeholder(&placeholder::USERS),
    },
    Route {
        path: "/providers",
        menu: MenuId::Providers,
        view: ViewKind::Placeholder(&placeholder::PROVIDERS),
    },
    Route {
        path: "/products",
        menu: MenuId::Products,
        view: ViewKind::Placeholder(&placeholder::PRODUCTS),
    },
    Route {
        path: "/connections",
        menu: MenuId::Connections,
        view: ViewKind::Placeholder(&placeholder::CONNECTIONS),
    },
    Route {
        path: "/lost-found",
        menu: MenuId::LostFound,
        view: ViewKind::Placeholder(&placeholder::LOST_FOUND),
    },
    Route {
        path: "/complaints",
        menu: MenuId::Complaints,
        view: ViewKind::Placeholder(&placeholder::COMPLAINTS),
    },
    Route {
        path: "/scholarships",
        menu: MenuId::Scholarships,
        view: ViewKind::Placeholder(&placeholder::SCHOLARSHIPS),
    },
    Route {
        path: "/financial",
        menu: MenuId::Financial,
        view: ViewKind::Placeholder(&placeholder::FINANCIAL),
    },
    Route {
        path: "/settings",
        menu: MenuId::Settings,
        view: ViewKind::Placeholder(&placeholder::SETTINGS),
    },
];

/// Outcome of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub route: &'static Route,
    /// True when the requested path was unknown and the default was used.
    pub redirected: bool,
}

/// The default route (`/`).
pub fn default_route() -> &'static Route {
    &ROUTES[0]
}

/// Looks a path up in the route table. Trailing slashes are ignored.
pub fn lookup(path: &str) -> Option<&'static Route> {
    let normalized = normalize(path);
    ROUTES.iter().find(|route| route.path == normalized)
}

/// Resolves a path, falling back to the default route for unknown paths.
pub fn resolve(path: &str) -> Resolution {
    match lookup(path) {
        Some(route) => Resolution {
            route,
            redirected: false,
        },
        None => Resolution {
            route: default_route(),
            redirected: true,
        },
    }
}

/// The route bound to a menu entry.
pub fn route_for(menu: MenuId) -> &'static Route {
    // ROUTES is ordered like the menu.
    &ROUTES[menu.position()]
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim();
    if trimmed.len() > 1 {
        trimmed.trim_end_matches('/')
    } else {
        trimmed
    }
}

/// Current route plus back history.
#[derive(Debug)]
pub struct Router {
    history: Vec<&'static Route>,
}

impl Router {
    /// Creates a router positioned on the default route.
    pub fn new() -> Self {
        Self {
            history: vec![default_route()],
        }
    }

    /// Creates a router positioned on `path` (or the default when unknown).
    pub fn starting_at(path: &str) -> Self {
        let mut router = Self::new();
        router.navigate(path);
        router
    }

    pub fn current(&self) -> &'static Route {
        // history is never empty
        self.history[self.history.len() - 1]
    }

    /// Navigates to `path`. Landing on the route already shown does not
    /// grow the history, so repeated redirects stay a single hop.
    pub fn navigate(&mut self, path: &str) -> Resolution {
        let resolution = resolve(path);
        if resolution.redirected {
            debug!("Unknown path {:?}, redirecting to {}", path, DEFAULT_PATH);
        }
        if resolution.route != self.current() {
            if self.history.len() == MAX_ROUTE_HISTORY {
                self.history.remove(0);
            }
            self.history.push(resolution.route);
        }
        resolution
    }

    /// Steps back one entry. Returns false when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MENU;
    use std::collections::HashSet;

    #[test]
    fn every_menu_path_maps_to_exactly_one_view() {
        let mut seen = HashSet::new();
        for entry in MENU.iter() {
            let resolution = resolve(entry.path);
            assert!(!resolution.redirected, "{} should be routable", entry.path);
            assert_eq!(resolution.route.menu, entry.id);
            assert!(seen.insert(resolution.route.path));
        }
        assert_eq!(seen.len(), ROUTES.len());
    }

    #[test]
    fn only_the_root_shows_the_dashboard() {
        let dashboards = ROUTES
            .iter()
            .filter(|r| r.view == ViewKind::Dashboard)
            .count();
        assert_eq!(dashboards, 1);
        assert_eq!(resolve("/").route.view, ViewKind::Dashboard);
    }

    #[test]
    fn unknown_paths_resolve_to_default() {
        for path in ["/nope", "", "/users/42", "users", "/USERS"] {
            let resolution = resolve(path);
            assert!(resolution.redirected, "{path:?} should redirect");
            assert_eq!(resolution.route.path, DEFAULT_PATH);
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let resolution = resolve("/users/");
        assert!(!resolution.redirected);
        assert_eq!(resolution.route.menu, MenuId::Users);
    }

    #[test]
    fn repeated_invalid_navigation_is_idempotent() {
        let mut router = Router::new();
        for path in ["/a", "/b", "/c/d", "/a"] {
            let resolution = router.navigate(path);
            assert!(resolution.redirected);
            assert_eq!(router.current().path, DEFAULT_PATH);
            assert_eq!(router.history_len(), 1);
        }
    }

    #[test]
    fn invalid_navigation_from_a_feature_is_one_hop() {
        let mut router = Router::starting_at("/complaints");
        assert_eq!(router.history_len(), 2);

        router.navigate("/missing");
        router.navigate("/missing-again");
        assert_eq!(router.current().path, DEFAULT_PATH);
        assert_eq!(router.history_len(), 3);

        assert!(router.back());
        assert_eq!(router.current().menu, MenuId::Complaints);
    }

    #[test]
    fn back_never_empties_history() {
        let mut router = Router::new();
        assert!(!router.back());
        assert_eq!(router.current().path, DEFAULT_PATH);
    }

    #[test]
    fn history_is_bounded() {
        let mut router = Router::new();
        for i in 0..(MAX_ROUTE_HISTORY * 2) {
            let path = if i % 2 == 0 { "/users" } else { "/settings" };
            router.navigate(path);
        }
        assert_eq!(router.history_len(), MAX_ROUTE_HISTORY);
    }

    #[test]
    fn route_for_matches_menu_path() {
        for entry in MENU.iter() {
            assert_eq!(route_for(entry.id).path, entry.path);
        }
    }
}
