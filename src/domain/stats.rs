use crate::domain::badge::{Badge, BadgeProgress};
use serde::Deserialize;

/// Reward statistics of a single user, as computed by the backend.
#[derive(Clone, PartialEq, Default, Debug, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub user_id: String,
    pub total_points: u64,
    pub items_scanned: u64,
    pub items_recycled: u64,
    pub co2_saved_kg: f64,
    pub badges: Vec<String>,
}

impl UserStats {
    pub fn empty(user_id: impl Into<String>) -> Self {
        UserStats {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    /// Badges the backend has awarded, skipping names this client does not know.
    pub fn earned_badges(&self) -> Vec<Badge> {
        self.badges.iter().filter_map(|name| Badge::from_name(name)).collect()
    }

    pub fn badge_progress(&self) -> Vec<BadgeProgress> {
        Badge::all().into_iter().map(|badge| badge.progress(self)).collect()
    }

    pub fn add_points(&mut self, points: u32) {
        self.total_points = self.total_points.saturating_add(u64::from(points));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn missing_fields_use_backend_defaults() {
        let stats = serde_json::from_value::<UserStats>(json!({ "user_id": "alice", "total_points": 15 })).unwrap();

        assert_eq!(
            stats,
            UserStats {
                user_id: "alice".to_string(),
                total_points: 15,
                ..Default::default()
            }
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = json!({
            "user_id": "default_user",
            "total_points": 120,
            "items_scanned": 12,
            "items_recycled": 4,
            "co2_saved_kg": 6.0,
            "badges": ["Eco Warrior"],
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-02T00:00:00"
        });

        let stats = serde_json::from_value::<UserStats>(json).unwrap();

        assert_eq!(stats.items_scanned, 12);
        assert_eq!(stats.earned_badges(), vec![Badge::EcoWarrior]);
    }

    #[test]
    fn earned_badges_skips_unknown_names() {
        let mut stats = UserStats::empty("bob");
        stats.badges = vec!["Plastic Reducer".to_string(), "Night Owl".to_string()];

        assert_eq!(stats.earned_badges(), vec![Badge::PlasticReducer]);
    }

    #[test]
    fn add_points_accumulates() {
        let mut stats = UserStats::empty("bob");
        stats.add_points(10);
        stats.add_points(5);

        assert_eq!(stats.total_points, 15);
    }
}
