// ABOUTME: Engine-side contract of the external persistent store
// ABOUTME: GroupStore trait plus an in-memory implementation for demos and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

//! External store boundary.
//!
//! Persistence, realtime change notifications, and the join flow live
//! outside this crate; the engine only needs snapshots of a group's
//! members and check-in log. Store errors surface to the caller
//! unmodified, never reinterpreted by the engine.

use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{Checkin, User};

/// Read access the engine requires from whatever store hosts the data
pub trait GroupStore {
    /// Members of a group, in insertion order
    ///
    /// # Errors
    ///
    /// Implementations surface their own storage failures; the engine
    /// passes them through unchanged.
    fn users(&self, group_id: Uuid) -> AppResult<Vec<User>>;

    /// Check-in log for a group. Newest-first ordering is recommended
    /// but not required; the engine does not depend on it.
    ///
    /// # Errors
    ///
    /// Implementations surface their own storage failures; the engine
    /// passes them through unchanged.
    fn checkins(&self, group_id: Uuid) -> AppResult<Vec<Checkin>>;
}

/// In-memory store used by the demo binary and integration tests
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    users: Vec<User>,
    checkins: Vec<Checkin>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: Vec::new(),
            checkins: Vec::new(),
        }
    }

    /// Add a member, preserving insertion order
    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Append a check-in record
    pub fn add_checkin(&mut self, checkin: Checkin) {
        self.checkins.push(checkin);
    }
}

impl GroupStore for InMemoryStore {
    fn users(&self, group_id: Uuid) -> AppResult<Vec<User>> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.group_id == group_id)
            .cloned()
            .collect())
    }

    fn checkins(&self, group_id: Uuid) -> AppResult<Vec<Checkin>> {
        let member_ids: Vec<Uuid> = self
            .users
            .iter()
            .filter(|u| u.group_id == group_id)
            .map(|u| u.id)
            .collect();
        Ok(self
            .checkins
            .iter()
            .filter(|c| member_ids.contains(&c.user_id))
            .cloned()
            .collect())
    }
}
