use crate::domain::Badge;
use crate::store::AppState;
use tokio::sync::watch::Receiver;
use tracing::{info, instrument};

/// Logs the user's reward progress every time the store publishes a new snapshot.
#[instrument(skip_all)]
pub async fn store_listener(mut rx: Receiver<AppState>) {
    while rx.changed().await.is_ok() {
        let snapshot: AppState = rx.borrow().clone();
        let Some(stats) = snapshot.user_stats else {
            continue;
        };

        info!(
            user_id = stats.user_id,
            "⭐ {} points, {} items scanned, {} recycled, {:.1} kg CO₂ saved",
            stats.total_points,
            stats.items_scanned,
            stats.items_recycled,
            stats.co2_saved_kg
        );
        for progress in stats.badge_progress() {
            let marker = if stats.earned_badges().contains(&progress.badge) { "🏆" } else { "🎯" };
            info!("{} {} ({}): {}", marker, progress.badge, progress.badge.description(), progress);
        }
        if stats.badges.is_empty() {
            info!("🎯 No badges earned yet, scan {} items to earn '{}'", Badge::EcoWarrior.target(), Badge::EcoWarrior);
        }
    }
}
