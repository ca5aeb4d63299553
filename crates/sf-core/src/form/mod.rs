//! Form domain module.
//!
//! Field identifiers, per-field state, validators, strength scoring, touch
//! tracking and the aggregate [`FormSnapshot`].

mod field;
pub mod snapshot;
pub mod strength;
pub mod touch;
pub mod validation;
pub mod view;

pub use field::{Checkbox, FieldId, FieldState, TextField};
pub use snapshot::FormSnapshot;
pub use strength::{PasswordStrength, StrengthLabel};
pub use touch::TouchTracker;
pub use validation::ValidationError;
pub use view::{FieldView, FormView, Panel};
