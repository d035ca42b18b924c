//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a distinct feedback cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(Uuid);

impl FeedbackId {
    /// Creates a new random FeedbackId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a FeedbackId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FeedbackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FeedbackId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a generated budget distribution snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistributionId(Uuid);

impl DistributionId {
    /// Creates a new random DistributionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a DistributionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DistributionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DistributionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DistributionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_ids_are_unique() {
        assert_ne!(FeedbackId::new(), FeedbackId::new());
    }

    #[test]
    fn feedback_id_parses_from_display() {
        let id = FeedbackId::new();
        let parsed: FeedbackId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn distribution_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<DistributionId>().is_err());
    }

    #[test]
    fn distribution_id_serializes_as_plain_string() {
        let uuid = Uuid::nil();
        let json = serde_json::to_string(&DistributionId::from_uuid(uuid)).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }
}
