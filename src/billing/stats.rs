//! Per-user usage totals.

use std::collections::HashMap;

use serde::Serialize;

/// Accumulated usage for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    /// Number of sessions attributed to the user.
    pub sessions: u64,
    /// Total session time in seconds. May be negative when an End was
    /// paired with a later Start.
    pub total_time: i64,
}

impl UserStats {
    /// Record one completed session.
    pub fn add_session(&mut self, seconds: i64) {
        self.sessions += 1;
        self.total_time += seconds;
    }

    /// Adjust the total without counting a session.
    pub fn add_time(&mut self, seconds: i64) {
        self.total_time += seconds;
    }
}

/// A user together with their totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUsage {
    pub user: String,
    #[serde(flatten)]
    pub stats: UserStats,
}

/// Usage for every user seen in a run, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsageReport {
    users: Vec<UserUsage>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl UsageReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the totals for `user`, inserting zeroed stats at the end of the
    /// ordering if the user is new.
    pub fn entry(&mut self, user: &str) -> &mut UserStats {
        let position = match self.index.get(user) {
            Some(&position) => position,
            None => {
                let position = self.users.len();
                self.index.insert(user.to_string(), position);
                self.users.push(UserUsage {
                    user: user.to_string(),
                    stats: UserStats::default(),
                });
                position
            }
        };
        &mut self.users[position].stats
    }

    /// Look up a user's totals.
    pub fn get(&self, user: &str) -> Option<&UserStats> {
        self.index.get(user).map(|&position| &self.users[position].stats)
    }

    /// Iterate users in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &UserUsage> {
        self.users.iter()
    }

    /// Mutable access to every user's totals, in first-seen order.
    pub fn stats_mut(&mut self) -> impl Iterator<Item = &mut UserStats> {
        self.users.iter_mut().map(|usage| &mut usage.stats)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
