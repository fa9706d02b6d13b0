//! Members and the member roster
//!
//! The roster is the closed set of people who share the expense. Exactly one
//! of them is the primary payer: the person who pays the clinic directly and
//! is always considered settled. Everyone else is a contributor who owes an
//! equal share.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A participant identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Member(String);

impl Member {
    /// Create a member from a name, trimming surrounding whitespace
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Member {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// How a member relates to the split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    /// Pays the provider directly; never owes anything
    PrimaryPayer,
    /// Owes an equal share of the total
    Contributor,
}

/// The configured set of members and the designated primary payer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRoster {
    members: Vec<Member>,
    primary: Member,
}

impl MemberRoster {
    /// Build a roster, validating the member list and primary payer
    pub fn new(members: Vec<Member>, primary: Member) -> Result<Self, RosterError> {
        if members.is_empty() {
            return Err(RosterError::Empty);
        }

        for (i, member) in members.iter().enumerate() {
            if member.name().is_empty() {
                return Err(RosterError::BlankName);
            }
            if members[..i].contains(member) {
                return Err(RosterError::Duplicate(member.to_string()));
            }
        }

        if !members.contains(&primary) {
            return Err(RosterError::UnknownPrimary(primary.to_string()));
        }

        Ok(Self { members, primary })
    }

    /// All members in configured order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn primary_payer(&self) -> &Member {
        &self.primary
    }

    /// Members who owe a share (everyone except the primary payer)
    pub fn contributors(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(move |m| **m != self.primary)
    }

    pub fn is_contributor(&self, member: &Member) -> bool {
        *member != self.primary && self.members.contains(member)
    }

    pub fn role_of(&self, member: &Member) -> Option<MemberRole> {
        if *member == self.primary {
            Some(MemberRole::PrimaryPayer)
        } else if self.members.contains(member) {
            Some(MemberRole::Contributor)
        } else {
            None
        }
    }

    /// Number of equal shares the total is divided into
    pub fn split_count(&self) -> i64 {
        self.members.len() as i64
    }
}

/// Validation errors for a roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    Empty,
    BlankName,
    Duplicate(String),
    UnknownPrimary(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Member list cannot be empty"),
            Self::BlankName => write!(f, "Member names cannot be blank"),
            Self::Duplicate(name) => write!(f, "Member listed twice: {}", name),
            Self::UnknownPrimary(name) => {
                write!(f, "Primary payer '{}' is not in the member list", name)
            }
        }
    }
}

impl std::error::Error for RosterError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> MemberRoster {
        MemberRoster::new(
            vec!["Mom".into(), "Seunghwa".into(), "Seungjin".into()],
            "Mom".into(),
        )
        .unwrap()
    }

    #[test]
    fn test_contributors_exclude_primary() {
        let roster = roster();
        let contributors: Vec<_> = roster.contributors().map(|m| m.name()).collect();
        assert_eq!(contributors, vec!["Seunghwa", "Seungjin"]);
        assert_eq!(roster.split_count(), 3);
    }

    #[test]
    fn test_roles() {
        let roster = roster();
        assert_eq!(roster.role_of(&"Mom".into()), Some(MemberRole::PrimaryPayer));
        assert_eq!(
            roster.role_of(&"Seungjin".into()),
            Some(MemberRole::Contributor)
        );
        assert_eq!(roster.role_of(&"Dad".into()), None);
        assert!(roster.is_contributor(&"Seunghwa".into()));
        assert!(!roster.is_contributor(&"Mom".into()));
        assert!(!roster.is_contributor(&"Dad".into()));
    }

    #[test]
    fn test_member_trims_name() {
        assert_eq!(Member::new("  Seunghwa "), Member::new("Seunghwa"));
    }

    #[test]
    fn test_invalid_rosters() {
        assert_eq!(
            MemberRoster::new(vec![], "Mom".into()),
            Err(RosterError::Empty)
        );
        assert_eq!(
            MemberRoster::new(vec!["Mom".into(), "Mom".into()], "Mom".into()),
            Err(RosterError::Duplicate("Mom".into()))
        );
        assert_eq!(
            MemberRoster::new(vec!["A".into(), "B".into()], "C".into()),
            Err(RosterError::UnknownPrimary("C".into()))
        );
        assert_eq!(
            MemberRoster::new(vec!["A".into(), " ".into()], "A".into()),
            Err(RosterError::BlankName)
        );
    }
}
