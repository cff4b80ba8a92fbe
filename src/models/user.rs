// ABOUTME: Group and member models with display attribute helpers
// ABOUTME: Group join-code generation, member initials, and color assignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{defaults, display};

/// An accountability group members join via a short code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group identifier
    pub id: Uuid,
    /// Short join code shared out-of-band with prospective members
    pub code: String,
    /// Display name of the group
    pub name: String,
    /// When the group was created
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Create a new group with a freshly generated join code
    #[must_use]
    pub fn new(name: impl Into<String>, rng: &mut impl Rng) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: Self::generate_code(rng),
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Generate a join code from the unambiguous alphabet
    #[must_use]
    pub fn generate_code(rng: &mut impl Rng) -> String {
        (0..defaults::GROUP_CODE_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..defaults::GROUP_CODE_ALPHABET.len());
                char::from(defaults::GROUP_CODE_ALPHABET[idx])
            })
            .collect()
    }
}

/// A member of an accountability group
///
/// Identity and display attributes only. Check-in history lives in the
/// append-only log, never on the user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier; all derived analytics key on this
    pub id: Uuid,
    /// Group this user belongs to
    pub group_id: Uuid,
    /// Display name
    pub name: String,
    /// Short initials shown in avatars and dense layouts
    pub initials: String,
    /// Display color (CSS hex), assigned round-robin from the palette
    pub color: String,
    /// When the user joined
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new member with derived initials and the palette color
    /// for their join position
    #[must_use]
    pub fn new(group_id: Uuid, name: impl Into<String>, member_index: usize) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            group_id,
            initials: initials_for(&name),
            color: color_for_index(member_index).into(),
            name,
            created_at: Utc::now(),
        }
    }
}

/// Derive avatar initials from a display name: first letter of up to
/// two whitespace-separated words, uppercased
#[must_use]
pub fn initials_for(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Palette color for the nth member of a group, cycling when the
/// palette is exhausted
#[must_use]
pub fn color_for_index(index: usize) -> &'static str {
    display::USER_COLORS[index % display::USER_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_initials_two_words() {
        assert_eq!(initials_for("Ada Lovelace"), "AL");
    }

    #[test]
    fn test_initials_single_word() {
        assert_eq!(initials_for("Cher"), "C");
    }

    #[test]
    fn test_initials_ignores_extra_words() {
        assert_eq!(initials_for("Jean Claude Van Damme"), "JC");
    }

    #[test]
    fn test_initials_empty_name() {
        assert_eq!(initials_for("   "), "");
    }

    #[test]
    fn test_group_code_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let code = Group::generate_code(&mut rng);
        assert_eq!(code.len(), defaults::GROUP_CODE_LENGTH);
        assert!(code
            .bytes()
            .all(|b| defaults::GROUP_CODE_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_color_assignment_cycles() {
        assert_eq!(color_for_index(0), display::USER_COLORS[0]);
        assert_eq!(
            color_for_index(display::USER_COLORS.len()),
            display::USER_COLORS[0]
        );
        assert_eq!(color_for_index(3), display::USER_COLORS[3]);
    }
}
