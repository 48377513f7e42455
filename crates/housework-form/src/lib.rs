//! Done-Housework Form Core
//!
//! Framework-free state behind the "mark housework as done" dialog:
//! - models: housework, member and request types shared with the backend
//! - reconcile: which selected members are new to a housework
//! - form: typed field values and declarative validation rules
//! - session: dialog lifecycle and submit orchestration
//! - config: labels and close behavior

pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod reconcile;
pub mod session;

pub use config::{ClosePolicy, FormConfig, Labels};
pub use error::{ConfigError, FormError};
pub use form::{selected_names, DoneHouseworkForm, Field, FormRules, Rule, ValidationErrors};
pub use models::{DoneHouseworkRequest, FamilyMember, Housework, HouseworkId, HouseworkMember, Member, MemberId};
pub use reconcile::{reconcile, AlreadyAssigned};
pub use session::{AssignedCache, CompletionFuture, DialogSession, Phase};
