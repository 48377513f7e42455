//! Member Selection Reconciliation
//!
//! Storage appends completion members, so only members that are not yet
//! recorded on the housework are forwarded.

use std::collections::HashSet;

use crate::models::{Housework, MemberId};

/// Member IDs already recorded against a housework
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlreadyAssigned {
    ids: HashSet<MemberId>,
    /// Recorded order, used to seed the form
    ordered: Vec<MemberId>,
}

impl AlreadyAssigned {
    pub fn from_housework(housework: &Housework) -> Self {
        housework.member_ids().collect()
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[MemberId] {
        &self.ordered
    }
}

impl FromIterator<MemberId> for AlreadyAssigned {
    fn from_iter<I: IntoIterator<Item = MemberId>>(iter: I) -> Self {
        let mut assigned = Self::default();
        for id in iter {
            if assigned.ids.insert(id) {
                assigned.ordered.push(id);
            }
        }
        assigned
    }
}

/// Submitted IDs that are not already assigned, in submission order
pub fn reconcile(already_assigned: &AlreadyAssigned, submitted: &[MemberId]) -> Vec<MemberId> {
    submitted
        .iter()
        .copied()
        .filter(|id| !already_assigned.contains(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HouseworkMember, Member};
    use proptest::prelude::*;

    fn assigned(ids: &[MemberId]) -> AlreadyAssigned {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_only_new_members_are_forwarded() {
        assert_eq!(reconcile(&assigned(&[2, 5]), &[2, 5, 7]), vec![7]);
    }

    #[test]
    fn test_nothing_assigned_forwards_selection() {
        assert_eq!(reconcile(&assigned(&[]), &[3]), vec![3]);
    }

    #[test]
    fn test_resubmitting_assigned_forwards_nothing() {
        assert!(reconcile(&assigned(&[1, 4]), &[4, 1]).is_empty());
    }

    #[test]
    fn test_order_follows_submission() {
        assert_eq!(reconcile(&assigned(&[2]), &[9, 2, 1, 6]), vec![9, 1, 6]);
    }

    #[test]
    fn test_from_housework() {
        let mut hw = Housework::new(1, "Laundry");
        for id in [3, 8, 3] {
            hw.housework_members.push(HouseworkMember {
                member: Member { id, name: format!("m{}", id) },
            });
        }
        let set = AlreadyAssigned::from_housework(&hw);
        assert_eq!(set.len(), 2);
        assert_eq!(set.ids(), &[3, 8]);
        assert!(set.contains(8));
        assert!(!set.contains(1));
    }

    proptest! {
        #[test]
        fn prop_output_is_ordered_subset_disjoint_from_assigned(
            already in proptest::collection::vec(0u32..20, 0..10),
            submitted in proptest::collection::hash_set(0u32..20, 0..15),
        ) {
            let already = assigned(&already);
            let submitted: Vec<MemberId> = submitted.into_iter().collect();
            let out = reconcile(&already, &submitted);

            prop_assert!(out.iter().all(|id| !already.contains(*id)));
            // order-preserving subsequence of submitted
            let mut rest = submitted.iter();
            for id in &out {
                prop_assert!(rest.any(|s| s == id));
            }
            let expected = submitted.iter().filter(|id| !already.contains(**id)).count();
            prop_assert_eq!(out.len(), expected);
        }

        #[test]
        fn prop_empty_assigned_is_identity(
            submitted in proptest::collection::hash_set(0u32..50, 0..15),
        ) {
            let submitted: Vec<MemberId> = submitted.into_iter().collect();
            prop_assert_eq!(reconcile(&AlreadyAssigned::default(), &submitted), submitted);
        }

        #[test]
        fn prop_empty_submission_is_empty(
            already in proptest::collection::vec(0u32..50, 0..15),
        ) {
            prop_assert!(reconcile(&assigned(&already), &[]).is_empty());
        }

        #[test]
        fn prop_assigned_against_itself_is_empty(
            already in proptest::collection::hash_set(0u32..50, 0..15),
        ) {
            let ids: Vec<MemberId> = already.into_iter().collect();
            prop_assert!(reconcile(&assigned(&ids), &ids).is_empty());
        }
    }
}
