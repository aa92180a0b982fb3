//! Customer premises routers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(12))")]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[sea_orm(string_value = "active")]
    Active,
    #[default]
    #[sea_orm(string_value = "offline")]
    Offline,
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Offline => "Offline",
            Self::Maintenance => "Maintenance",
        }
    }

    /// CSS class of the status badge shown in the router table.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Active => "badge-primary",
            Self::Offline => "badge-danger",
            Self::Maintenance => "badge-warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum Location {
    #[sea_orm(string_value = "north")]
    North,
    #[sea_orm(string_value = "south")]
    South,
    #[sea_orm(string_value = "east")]
    East,
    #[sea_orm(string_value = "west")]
    West,
    #[sea_orm(string_value = "central")]
    Central,
}

impl Location {
    pub fn label(&self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Central => "Central",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "routers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Operator facing identifier such as `R001`
    #[sea_orm(unique)]
    pub router_id: String,
    pub client_id: i32,
    pub status: Status,
    /// Continuous uptime in whole seconds
    pub uptime: Option<i64>,
    /// Signal strength in dBm, between -120 and -30
    pub signal_strength: Option<f64>,
    pub location: Location,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub last_seen: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Client,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn signal_strength_display(&self) -> String {
        match self.signal_strength {
            Some(dbm) => format!("{:.0} dBm", dbm),
            None => "N/A".to_string(),
        }
    }

    /// Uptime as `"{h}h {m}m"`, or just minutes below one hour.
    pub fn uptime_display(&self) -> String {
        let Some(seconds) = self.uptime else {
            return "0h".to_string();
        };

        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;

        if hours > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}m", minutes)
        }
    }

    pub fn status_badge_color(&self) -> &'static str {
        self.status.badge_color()
    }

    /// Row label of the form `R001 - Client Name`.
    pub fn label(&self, client: &super::client::Model) -> String {
        format!("{} - {}", self.router_id, client.name)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{prelude::Date, ActiveEnum, Iterable};

    use super::{Location, Model, Status};

    fn router(uptime: Option<i64>, signal_strength: Option<f64>) -> Model {
        let now = Date::from_ymd_opt(2025, 10, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        Model {
            id: 1,
            router_id: "R001".to_string(),
            client_id: 1,
            status: Status::Active,
            uptime,
            signal_strength,
            location: Location::North,
            created_at: now,
            updated_at: now,
            last_seen: None,
        }
    }

    #[test]
    fn displays_hours_and_minutes() {
        assert_eq!(router(Some(90 * 60), None).uptime_display(), "1h 30m");
        assert_eq!(router(Some(26 * 3600 + 59), None).uptime_display(), "26h 0m");
    }

    #[test]
    fn displays_minutes_under_an_hour() {
        assert_eq!(router(Some(45 * 60 + 30), None).uptime_display(), "45m");
        assert_eq!(router(Some(0), None).uptime_display(), "0m");
    }

    #[test]
    fn displays_missing_uptime_as_zero_hours() {
        assert_eq!(router(None, None).uptime_display(), "0h");
    }

    #[test]
    fn displays_signal_strength() {
        assert_eq!(router(None, Some(-65.4)).signal_strength_display(), "-65 dBm");
        assert_eq!(router(None, None).signal_strength_display(), "N/A");
    }

    #[test]
    fn maps_status_to_badge_color() {
        let mut model = router(None, None);
        assert_eq!(model.status_badge_color(), "badge-primary");
        model.status = Status::Offline;
        assert_eq!(model.status_badge_color(), "badge-danger");
        model.status = Status::Maintenance;
        assert_eq!(model.status_badge_color(), "badge-warning");
    }

    #[test]
    fn serializes_choices_as_stored_value() {
        for status in Status::iter() {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, serde_json::Value::String(status.to_value()));
            assert_eq!(serde_json::from_value::<Status>(json).unwrap(), status);
        }

        for location in Location::iter() {
            let json = serde_json::to_value(location).unwrap();
            assert_eq!(json, serde_json::Value::String(location.to_value()));
            assert_eq!(serde_json::from_value::<Location>(json).unwrap(), location);
        }
    }
}
