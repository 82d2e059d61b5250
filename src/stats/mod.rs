//! Dashboard statistics
//!
//! The payload shape a backend would return for the admin dashboard, the
//! derived stat cards and chart series, and the source seam that produces it.

pub mod error;
pub mod source;

pub use error::StatsError;
pub use source::{DashboardSource, MockPayloadSource};

use serde::{Deserialize, Serialize};

/// Platform totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub total_users: u64,
    pub total_providers: u64,
    pub total_products: u64,
    pub total_complaints: u64,
}

/// New records over the last 30 days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Growth {
    pub new_users_30d: u64,
    pub new_providers_30d: u64,
    pub new_products_30d: u64,
    pub new_complaints_30d: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyCount {
    pub specialty: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charts {
    pub daily_conversations: Vec<DailyCount>,
    pub top_product_categories: Vec<CategoryCount>,
    pub top_provider_specialties: Vec<SpecialtyCount>,
    pub complaint_status: Vec<StatusCount>,
}

/// Everything the dashboard renders from the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub overview: Overview,
    pub growth: Growth,
    pub charts: Charts,
}

/// One labelled measure of a chart series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl From<&DailyCount> for SeriesPoint {
    fn from(point: &DailyCount) -> Self {
        SeriesPoint::new(point.date.clone(), point.count)
    }
}

impl From<&CategoryCount> for SeriesPoint {
    fn from(point: &CategoryCount) -> Self {
        SeriesPoint::new(point.category.clone(), point.count)
    }
}

impl From<&SpecialtyCount> for SeriesPoint {
    fn from(point: &SpecialtyCount) -> Self {
        SeriesPoint::new(point.specialty.clone(), point.count)
    }
}

impl From<&StatusCount> for SeriesPoint {
    fn from(point: &StatusCount) -> Self {
        SeriesPoint::new(point.status.clone(), point.count)
    }
}

/// Whether a card's delta reads as good or bad news. Tagged per card,
/// never computed from the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Positive,
    Negative,
}

/// Accent used for a stat card's icon and underline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Red,
}

/// One summary card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub value: u64,
    pub change: i64,
    pub change_type: ChangeType,
    pub accent: Accent,
}

fn as_delta(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

impl DashboardStats {
    /// Checks the invariants a loaded payload must hold.
    pub fn validate(&self) -> Result<(), StatsError> {
        let charts = &self.charts;
        let series = [
            ("daily_conversations", charts.daily_conversations.is_empty()),
            (
                "top_product_categories",
                charts.top_product_categories.is_empty(),
            ),
            (
                "top_provider_specialties",
                charts.top_provider_specialties.is_empty(),
            ),
            ("complaint_status", charts.complaint_status.is_empty()),
        ];
        match series.iter().find(|(_, empty)| *empty) {
            Some((name, _)) => Err(StatsError::Malformed(format!(
                "chart series `{}` is empty",
                name
            ))),
            None => Ok(()),
        }
    }

    /// The four summary cards, in display order.
    pub fn stat_cards(&self) -> [StatCard; 4] {
        [
            StatCard {
                title: "Total de Usuários",
                icon: "◉",
                value: self.overview.total_users,
                change: as_delta(self.growth.new_users_30d),
                change_type: ChangeType::Positive,
                accent: Accent::Blue,
            },
            StatCard {
                title: "Prestadores Ativos",
                icon: "◆",
                value: self.overview.total_providers,
                change: as_delta(self.growth.new_providers_30d),
                change_type: ChangeType::Positive,
                accent: Accent::Green,
            },
            StatCard {
                title: "Produtos Ativos",
                icon: "◇",
                value: self.overview.total_products,
                change: as_delta(self.growth.new_products_30d),
                change_type: ChangeType::Positive,
                accent: Accent::Purple,
            },
            StatCard {
                title: "Reclamações",
                icon: "✉",
                value: self.overview.total_complaints,
                change: as_delta(self.growth.new_complaints_30d),
                change_type: ChangeType::Negative,
                accent: Accent::Red,
            },
        ]
    }

    pub fn daily_conversations(&self) -> Vec<SeriesPoint> {
        self.charts.daily_conversations.iter().map(Into::into).collect()
    }

    pub fn top_product_categories(&self) -> Vec<SeriesPoint> {
        self.charts
            .top_product_categories
            .iter()
            .map(Into::into)
            .collect()
    }

    pub fn top_provider_specialties(&self) -> Vec<SeriesPoint> {
        self.charts
            .top_provider_specialties
            .iter()
            .map(Into::into)
            .collect()
    }

    pub fn complaint_status(&self) -> Vec<SeriesPoint> {
        self.charts.complaint_status.iter().map(Into::into).collect()
    }
}

/// Kind of event shown in the recent activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    User,
    Product,
    Complaint,
    Provider,
    Connection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEntry {
    pub action: &'static str,
    pub actor: &'static str,
    /// Relative time, already formatted. Not computed from a clock.
    pub time: &'static str,
    pub kind: ActivityKind,
}

/// The synthetic recent activity feed, newest first.
pub const RECENT_ACTIVITY: [ActivityEntry; 5] = [
    ActivityEntry {
        action: "Novo usuário registrado",
        actor: "João Silva",
        time: "2 min atrás",
        kind: ActivityKind::User,
    },
    ActivityEntry {
        action: "Produto publicado",
        actor: "Maria Santos",
        time: "5 min atrás",
        kind: ActivityKind::Product,
    },
    ActivityEntry {
        action: "Reclamação resolvida",
        actor: "Sistema",
        time: "10 min atrás",
        kind: ActivityKind::Complaint,
    },
    ActivityEntry {
        action: "Prestador verificado",
        actor: "Admin",
        time: "15 min atrás",
        kind: ActivityKind::Provider,
    },
    ActivityEntry {
        action: "Nova conexão criada",
        actor: "Ana Costa",
        time: "20 min atrás",
        kind: ActivityKind::Connection,
    },
];

/// The fixed payload standing in for a backend response.
pub fn mock_payload() -> DashboardStats {
    fn daily(date: &str, count: u64) -> DailyCount {
        DailyCount {
            date: date.to_string(),
            count,
        }
    }
    fn category(category: &str, count: u64) -> CategoryCount {
        CategoryCount {
            category: category.to_string(),
            count,
        }
    }
    fn specialty(specialty: &str, count: u64) -> SpecialtyCount {
        SpecialtyCount {
            specialty: specialty.to_string(),
            count,
        }
    }
    fn status(status: &str, count: u64) -> StatusCount {
        StatusCount {
            status: status.to_string(),
            count,
        }
    }

    DashboardStats {
        overview: Overview {
            total_users: 15420,
            total_providers: 2340,
            total_products: 8750,
            total_complaints: 156,
        },
        growth: Growth {
            new_users_30d: 1250,
            new_providers_30d: 180,
            new_products_30d: 650,
            new_complaints_30d: 23,
        },
        charts: Charts {
            daily_conversations: vec![
                daily("2024-01-01", 120),
                daily("2024-01-02", 145),
                daily("2024-01-03", 165),
                daily("2024-01-04", 180),
                daily("2024-01-05", 195),
                daily("2024-01-06", 210),
                daily("2024-01-07", 225),
            ],
            top_product_categories: vec![
                category("Eletrônicos", 2340),
                category("Veículos", 1890),
                category("Casa & Jardim", 1560),
                category("Roupas", 1230),
                category("Esportes", 980),
            ],
            top_provider_specialties: vec![
                specialty("Eletricista", 450),
                specialty("Canalizador", 380),
                specialty("Pintor", 320),
                specialty("Mecânico", 290),
                specialty("Cabeleireira", 250),
            ],
            complaint_status: vec![
                status("Pendente", 45),
                status("Em Andamento", 67),
                status("Resolvida", 234),
                status("Rejeitada", 12),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_payload_is_valid() {
        let stats = mock_payload();
        assert_eq!(stats.validate(), Ok(()));
        assert_eq!(stats.daily_conversations().len(), 7);
        assert_eq!(stats.complaint_status().len(), 4);
        assert_eq!(stats.top_product_categories().len(), 5);
        assert_eq!(stats.top_provider_specialties().len(), 5);
    }

    #[test]
    fn empty_series_is_malformed() {
        let mut stats = mock_payload();
        stats.charts.complaint_status.clear();
        match stats.validate() {
            Err(StatsError::Malformed(msg)) => assert!(msg.contains("complaint_status")),
            other => panic!("expected malformed payload, got {:?}", other),
        }
    }

    #[test]
    fn stat_cards_copy_overview_and_growth() {
        let stats = mock_payload();
        let cards = stats.stat_cards();

        let values: Vec<u64> = cards.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![15420, 2340, 8750, 156]);

        let changes: Vec<i64> = cards.iter().map(|c| c.change).collect();
        assert_eq!(changes, vec![1250, 180, 650, 23]);
    }

    #[test]
    fn change_type_is_tagged_per_card() {
        let cards = mock_payload().stat_cards();
        let types: Vec<ChangeType> = cards.iter().map(|c| c.change_type).collect();
        assert_eq!(
            types,
            vec![
                ChangeType::Positive,
                ChangeType::Positive,
                ChangeType::Positive,
                ChangeType::Negative
            ]
        );
    }

    #[test]
    fn payload_json_uses_backend_field_names() {
        let json = serde_json::to_value(mock_payload()).unwrap();
        assert_eq!(json["overview"]["total_users"], 15420);
        assert_eq!(json["growth"]["new_complaints_30d"], 23);
        assert_eq!(json["charts"]["daily_conversations"][0]["date"], "2024-01-01");
        assert_eq!(json["charts"]["complaint_status"][2]["status"], "Resolvida");
    }

    #[test]
    fn payload_parses_from_backend_json() {
        let json = r#"{
            "overview": {"total_users": 1, "total_providers": 2, "total_products": 3, "total_complaints": 4},
            "growth": {"new_users_30d": 5, "new_providers_30d": 6, "new_products_30d": 7, "new_complaints_30d": 8},
            "charts": {
                "daily_conversations": [{"date": "2024-02-01", "count": 9}],
                "top_product_categories": [{"category": "Livros", "count": 10}],
                "top_provider_specialties": [{"specialty": "Jardineiro", "count": 11}],
                "complaint_status": [{"status": "Pendente", "count": 12}]
            }
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.overview.total_complaints, 4);
        assert_eq!(
            stats.top_provider_specialties(),
            vec![SeriesPoint::new("Jardineiro", 11)]
        );
        assert!(stats.validate().is_ok());
    }

    #[test]
    fn activity_feed_has_five_entries() {
        assert_eq!(RECENT_ACTIVITY.len(), 5);
        assert_eq!(RECENT_ACTIVITY[0].actor, "João Silva");
    }
}
