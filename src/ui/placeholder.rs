//! Feature placeholder panel
//!
//! One parameterized "under construction" panel shared by every feature that
//! has no implementation yet.

use crate::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub const NOTICE_TITLE: &str = "Em Desenvolvimento";
pub const NOTICE_BODY: &str =
    "Esta funcionalidade está sendo desenvolvida e estará disponível em breve.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturePlaceholder {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const USERS: FeaturePlaceholder = FeaturePlaceholder {
    title: "Gestão de Usuários",
    description: "Gerencie os usuários registrados na plataforma",
    icon: "◉",
};

pub const PROVIDERS: FeaturePlaceholder = FeaturePlaceholder {
    title: "Gestão de Prestadores",
    description: "Gerencie prestadores de serviços da plataforma",
    icon: "◆",
};

pub const PRODUCTS: FeaturePlaceholder = FeaturePlaceholder {
    title: "Gestão do Marketplace",
    description: "Gerencie produtos publicados no marketplace",
    icon: "◇",
};

pub const CONNECTIONS: FeaturePlaceholder = FeaturePlaceholder {
    title: "Gestão de Conexões",
    description: "Acompanhe as conexões entre usuários",
    icon: "♥",
};

pub const LOST_FOUND: FeaturePlaceholder = FeaturePlaceholder {
    title: "Achados e Perdidos",
    description: "Gerencie objetos achados e perdidos",
    icon: "○",
};

pub const COMPLAINTS: FeaturePlaceholder = FeaturePlaceholder {
    title: "Gestão de Reclamações",
    description: "Esta funcionalidade está em desenvolvimento",
    icon: "✉",
};

pub const SCHOLARSHIPS: FeaturePlaceholder = FeaturePlaceholder {
    title: "Gestão de Bolsas",
    description: "Gerencie bolsas de estudo oferecidas na plataforma",
    icon: "✎",
};

pub const FINANCIAL: FeaturePlaceholder = FeaturePlaceholder {
    title: "Mercado Financeiro",
    description: "Acompanhe indicadores do mercado financeiro",
    icon: "↗",
};

pub const SETTINGS: FeaturePlaceholder = FeaturePlaceholder {
    title: "Configurações",
    description: "Ajuste as configurações da plataforma",
    icon: "⚙",
};

impl FeaturePlaceholder {
    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} {} ", self.icon, self.title),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .padding(Padding::uniform(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Fill(1),
                Constraint::Length(5),
                Constraint::Fill(1),
            ])
            .split(inner);

        f.render_widget(
            Paragraph::new(Span::styled(
                self.description,
                Style::default().fg(palette.text_muted),
            )),
            chunks[0],
        );

        let notice = vec![
            Line::from(Span::styled("⚠", Style::default().fg(palette.warning))),
            Line::from(""),
            Line::from(Span::styled(
                NOTICE_TITLE,
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                NOTICE_BODY,
                Style::default().fg(palette.text_muted),
            )),
        ];
        f.render_widget(
            Paragraph::new(notice)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::render_to_string;

    #[test]
    fn placeholder_renders_title_description_and_notice() {
        let screen = render_to_string(100, 20, |f| {
            PROVIDERS.render(f, f.area(), &Palette::LIGHT)
        });
        assert!(screen.contains("Gestão de Prestadores"));
        assert!(screen.contains("Gerencie prestadores de serviços da plataforma"));
        assert!(screen.contains(NOTICE_TITLE));
        assert!(screen.contains("estará disponível em breve."));
    }
}
