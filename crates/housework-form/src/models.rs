//! Housework Models
//!
//! Data structures matching the household backend entities.

use serde::{Deserialize, Serialize};

pub type MemberId = u32;
pub type HouseworkId = u32;

/// A household member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
}

/// Family membership entry, one per selectable member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyMember {
    pub member: Member,
}

impl FamilyMember {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            member: Member { id, name: name.into() },
        }
    }

    pub fn id(&self) -> MemberId {
        self.member.id
    }
}

/// Association between a housework and a member who did it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HouseworkMember {
    pub member: Member,
}

/// Housework (chore) record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Housework {
    pub id: HouseworkId,
    #[serde(default)]
    pub name: String,
    /// Completion status
    pub status: bool,
    /// Members already recorded against this housework, in recorded order
    #[serde(default)]
    pub housework_members: Vec<HouseworkMember>,
}

impl Housework {
    pub fn new(id: HouseworkId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: false,
            housework_members: Vec::new(),
        }
    }

    /// Member IDs of the recorded associations, in recorded order
    pub fn member_ids(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.housework_members.iter().map(|hm| hm.member.id)
    }
}

/// Arguments handed to the completion callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoneHouseworkRequest {
    pub housework_id: HouseworkId,
    pub status: bool,
    /// Newly added members only
    pub member_ids: Vec<MemberId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_housework_member_ids_keep_order() {
        let mut hw = Housework::new(1, "Dishes");
        for (id, name) in [(5, "Hanako"), (2, "Taro")] {
            hw.housework_members.push(HouseworkMember {
                member: Member { id, name: name.to_string() },
            });
        }
        assert_eq!(hw.member_ids().collect::<Vec<_>>(), vec![5, 2]);
    }

    #[test]
    fn test_housework_deserializes_without_members() {
        let hw: Housework = serde_json::from_str(r#"{"id": 3, "status": true}"#).unwrap();
        assert_eq!(hw.id, 3);
        assert!(hw.status);
        assert!(hw.housework_members.is_empty());
    }

    #[test]
    fn test_request_uses_camel_case() {
        let req = DoneHouseworkRequest { housework_id: 4, status: true, member_ids: vec![7] };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["houseworkId"], 4);
        assert_eq!(json["memberIds"][0], 7);
    }
}
