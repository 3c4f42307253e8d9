use crate::domain::UserStats;

#[derive(Debug)]
pub enum Event {
    UserStatsLoaded(UserStats),
    LoadingChanged(bool),
    PointsAwarded(u32),
}
