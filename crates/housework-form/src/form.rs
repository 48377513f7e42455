//! Done-Housework Form State
//!
//! Typed field values plus a declarative map of field rules.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::Labels;
use crate::models::{FamilyMember, Housework, MemberId};
use crate::reconcile::AlreadyAssigned;

/// Fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Status,
    MemberIds,
}

/// Values entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoneHouseworkForm {
    pub status: bool,
    /// Selected members in selection order, never duplicated
    pub member_ids: Vec<MemberId>,
}

impl DoneHouseworkForm {
    /// Defaults: the housework's current status and its already assigned members
    pub fn seeded(housework: &Housework, assigned: &AlreadyAssigned) -> Self {
        Self {
            status: housework.status,
            member_ids: assigned.ids().to_vec(),
        }
    }

    pub fn set_status(&mut self, status: bool) {
        self.status = status;
    }

    /// Select the member if unselected, otherwise deselect it
    pub fn toggle_member(&mut self, id: MemberId) {
        if let Some(pos) = self.member_ids.iter().position(|m| *m == id) {
            self.member_ids.remove(pos);
        } else {
            self.member_ids.push(id);
        }
    }

    pub fn is_selected(&self, id: MemberId) -> bool {
        self.member_ids.contains(&id)
    }

    pub fn is_empty(&self, field: Field) -> bool {
        match field {
            Field::Status => false,
            Field::MemberIds => self.member_ids.is_empty(),
        }
    }
}

/// A single validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Field must hold a value
    Required { message: String },
}

impl Rule {
    fn check(&self, form: &DoneHouseworkForm, field: Field) -> Option<&str> {
        match self {
            Rule::Required { message } if form.is_empty(field) => Some(message.as_str()),
            Rule::Required { .. } => None,
        }
    }
}

/// Field name -> rules, checked in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRules {
    rules: BTreeMap<Field, Vec<Rule>>,
}

impl FormRules {
    pub fn from_labels(labels: &Labels) -> Self {
        Self::default().with(
            Field::MemberIds,
            Rule::Required { message: labels.members_required.clone() },
        )
    }

    pub fn with(mut self, field: Field, rule: Rule) -> Self {
        self.rules.entry(field).or_default().push(rule);
        self
    }

    pub fn validate(&self, form: &DoneHouseworkForm) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for (field, rules) in &self.rules {
            if let Some(message) = rules.iter().find_map(|rule| rule.check(form, *field)) {
                errors.0.insert(*field, message.to_string());
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// First failing message per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn message(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{:?}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Names of the selected members in selection order, joined with ", "
pub fn selected_names(members: &[FamilyMember], ids: &[MemberId]) -> String {
    ids.iter()
        .filter_map(|id| members.iter().find(|m| m.id() == *id))
        .map(|m| m.member.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
