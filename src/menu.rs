//! Sidebar menu table
//!
//! The fixed, ordered list of menu entries. Each entry links an id to its
//! label, glyph, route path and numeric shortcut.

use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Stable key of a menu entry, e.g. `lost-found`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum MenuId {
    #[default]
    Dashboard,
    Users,
    Providers,
    Products,
    Connections,
    LostFound,
    Complaints,
    Scholarships,
    Financial,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: MenuId,
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
    pub shortcut: char,
}

pub const MENU: [MenuEntry; 10] = [
    MenuEntry {
        id: MenuId::Dashboard,
        label: "Dashboard",
        icon: "▦",
        path: "/",
        shortcut: '1',
    },
    MenuEntry {
        id: MenuId::Users,
        label: "Usuários",
        icon: "◉",
        path: "/users",
        shortcut: '2',
    },
    MenuEntry {
        id: MenuId::Providers,
        label: "Prestadores",
        icon: "◆",
        path: "/providers",
        shortcut: '3',
    },
    MenuEntry {
        id: MenuId::Products,
        label: "Marketplace",
        icon: "◇",
        path: "/products",
        shortcut: '4',
    },
    MenuEntry {
        id: MenuId::Connections,
        label: "Conexões",
        icon: "♥",
        path: "/connections",
        shortcut: '5',
    },
    MenuEntry {
        id: MenuId::LostFound,
        label: "Achados/Perdidos",
        icon: "○",
        path: "/lost-found",
        shortcut: '6',
    },
    MenuEntry {
        id: MenuId::Complaints,
        label: "Reclamações",
        icon: "✉",
        path: "/complaints",
        shortcut: '7',
    },
    MenuEntry {
        id: MenuId::Scholarships,
        label: "Bolsas",
        icon: "✎",
        path: "/scholarships",
        shortcut: '8',
    },
    MenuEntry {
        id: MenuId::Financial,
        label: "Mercado",
        icon: "↗",
        path: "/financial",
        shortcut: '9',
    },
    MenuEntry {
        id: MenuId::Settings,
        label: "Configurações",
        icon: "⚙",
        path: "/settings",
        shortcut: '0',
    },
];

impl MenuId {
    /// The menu entry carrying this id.
    pub fn entry(self) -> &'static MenuEntry {
        // Every variant has exactly one row in MENU, in declaration order.
        &MENU[self.position()]
    }

    /// Zero-based position of this id in the menu.
    pub fn position(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Looks up an entry by its string id. Unknown ids yield `None`.
pub fn find(id: &str) -> Option<&'static MenuEntry> {
    MenuId::from_str(id).ok().map(MenuId::entry)
}

/// Looks up an entry by its numeric shortcut key.
pub fn by_shortcut(key: char) -> Option<&'static MenuEntry> {
    MENU.iter().find(|entry| entry.shortcut == key)
}

/// Entry at `position`, if any.
pub fn at(position: usize) -> Option<&'static MenuEntry> {
    MENU.get(position)
}
