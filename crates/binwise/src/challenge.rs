//! Community challenges.
//!
//! The registry holds the fixed set of active challenges for the session.
//! Challenge progress (`current`) is not linked to entry logging; the two
//! systems only meet in the presentation layer.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// A community goal with a weight target and a join action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Challenge {
    /// Stable identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// What the challenge asks participants to do.
    pub description: String,
    /// Goal weight in kg.
    pub target: f64,
    /// Progress so far in kg.
    pub current: f64,
    /// When the challenge ends.
    pub end_date: NaiveDate,
    /// Number of joins. Only ever increases.
    pub participants: u32,
    /// What participants earn on completion.
    pub reward: String,
}

impl Challenge {
    /// Progress toward the target as a percentage, capped at 100.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).min(100.0)
    }
}

/// How repeated joins of the same challenge are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinPolicy {
    /// Every join counts, including repeats by the same session.
    #[default]
    Unlimited,
    /// A challenge can be joined at most once per session.
    Idempotent,
}

/// The result of a join attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The participant count was incremented.
    Joined,
    /// The policy is [`JoinPolicy::Idempotent`] and this challenge was
    /// already joined; the count is unchanged.
    AlreadyJoined,
    /// No challenge with the given id exists; the registry is unchanged.
    UnknownChallenge,
}

/// In-memory list of active challenges, seeded at construction.
#[derive(Debug, Clone)]
pub struct ChallengeRegistry {
    challenges: Vec<Challenge>,
    policy: JoinPolicy,
    joined: HashSet<String>,
}

impl Default for ChallengeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeRegistry {
    /// Create a registry seeded with the default challenges and the
    /// permissive join policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(JoinPolicy::default())
    }

    /// Create a registry with an explicit join policy.
    #[must_use]
    pub fn with_policy(policy: JoinPolicy) -> Self {
        Self {
            challenges: default_challenges(),
            policy,
            joined: HashSet::new(),
        }
    }

    /// All challenges.
    #[must_use]
    pub fn list(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Look up a challenge by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Join the challenge with the given id.
    ///
    /// Under the default policy every call increments the participant count,
    /// repeats included. An unknown id leaves the registry untouched; the
    /// outcome tells the caller, but the registry itself stays silent.
    pub fn join(&mut self, id: &str) -> JoinOutcome {
        let Some(challenge) = self.challenges.iter_mut().find(|c| c.id == id) else {
            debug!("join ignored, no challenge with id {id}");
            return JoinOutcome::UnknownChallenge;
        };

        if self.policy == JoinPolicy::Idempotent && !self.joined.insert(id.to_string()) {
            return JoinOutcome::AlreadyJoined;
        }

        challenge.participants += 1;
        debug!(
            "joined challenge {id}, now {} participants",
            challenge.participants
        );
        JoinOutcome::Joined
    }
}

/// The fixed challenge set every session starts with.
fn default_challenges() -> Vec<Challenge> {
    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid challenge end date")
    }

    vec![
        Challenge {
            id: "1".to_string(),
            title: "Zero Waste Week".to_string(),
            description: "Reduce landfill waste to less than 1kg this week".to_string(),
            target: 1.0,
            current: 0.7,
            end_date: ymd(2025, 1, 25),
            participants: 127,
            reward: "50 points + Green Hero badge".to_string(),
        },
        Challenge {
            id: "2".to_string(),
            title: "Recycling Champion".to_string(),
            description: "Recycle 10kg of materials this month".to_string(),
            target: 10.0,
            current: 6.5,
            end_date: ymd(2025, 1, 31),
            participants: 89,
            reward: "100 points + Recycling Champion badge".to_string(),
        },
        Challenge {
            id: "3".to_string(),
            title: "Compost Community".to_string(),
            description: "Compost 5kg of organic waste this week".to_string(),
            target: 5.0,
            current: 3.2,
            end_date: ymd(2025, 1, 25),
            participants: 64,
            reward: "75 points + Compost Master badge".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_set() {
        let registry = ChallengeRegistry::new();
        let challenges = registry.list();

        assert_eq!(challenges.len(), 3);
        assert_eq!(challenges[0].title, "Zero Waste Week");
        assert_eq!(challenges[1].title, "Recycling Champion");
        assert_eq!(challenges[2].title, "Compost Community");
        assert_eq!(challenges[0].participants, 127);
        assert_eq!(challenges[1].participants, 89);
        assert_eq!(challenges[2].participants, 64);
    }

    #[test]
    fn test_join_increments_participants() {
        let mut registry = ChallengeRegistry::new();

        let outcome = registry.join("1");
        assert_eq!(outcome, JoinOutcome::Joined);
        assert_eq!(registry.get("1").unwrap().participants, 128);
    }

    #[test]
    fn test_join_is_not_idempotent_by_default() {
        // Double join counts twice under the default policy.
        let mut registry = ChallengeRegistry::new();

        registry.join("1");
        registry.join("1");
        assert_eq!(registry.get("1").unwrap().participants, 129);
    }

    #[test]
    fn test_join_unknown_id_is_a_no_op() {
        let mut registry = ChallengeRegistry::new();
        let before: Vec<u32> = registry.list().iter().map(|c| c.participants).collect();

        let outcome = registry.join("nonexistent");
        assert_eq!(outcome, JoinOutcome::UnknownChallenge);

        let after: Vec<u32> = registry.list().iter().map(|c| c.participants).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_idempotent_policy_counts_once() {
        let mut registry = ChallengeRegistry::with_policy(JoinPolicy::Idempotent);

        assert_eq!(registry.join("2"), JoinOutcome::Joined);
        assert_eq!(registry.join("2"), JoinOutcome::AlreadyJoined);
        assert_eq!(registry.get("2").unwrap().participants, 90);
    }

    #[test]
    fn test_idempotent_policy_tracks_per_challenge() {
        let mut registry = ChallengeRegistry::with_policy(JoinPolicy::Idempotent);

        assert_eq!(registry.join("1"), JoinOutcome::Joined);
        assert_eq!(registry.join("3"), JoinOutcome::Joined);
        assert_eq!(registry.get("1").unwrap().participants, 128);
        assert_eq!(registry.get("3").unwrap().participants, 65);
    }

    #[test]
    fn test_progress_percent() {
        let registry = ChallengeRegistry::new();

        // Zero Waste Week: 0.7 of 1.0 kg.
        let percent = registry.get("1").unwrap().progress_percent();
        assert!((percent - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_percent_caps_at_100() {
        let mut challenge = ChallengeRegistry::new().get("1").unwrap().clone();
        challenge.current = 5.0;
        assert_eq!(challenge.progress_percent(), 100.0);
    }

    #[test]
    fn test_progress_percent_zero_target() {
        let mut challenge = ChallengeRegistry::new().get("1").unwrap().clone();
        challenge.target = 0.0;
        assert_eq!(challenge.progress_percent(), 0.0);
    }

    #[test]
    fn test_challenge_serializes() {
        let registry = ChallengeRegistry::new();
        let json = serde_json::to_value(registry.list()).unwrap();

        assert_eq!(json[0]["id"], "1");
        assert_eq!(json[0]["end_date"], "2025-01-25");
        assert_eq!(json[0]["participants"], 127);
    }
}
