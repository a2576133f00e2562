//! Policy rule sections
//!
//! Each section checks one aspect of a password against the policy.

mod dictionary;
mod length;
mod variety;

pub use dictionary::disallow_list_section;
pub use length::{max_length_section, min_length_section};
pub use variety::{
    letters_section, numbers_or_symbols_section, numbers_section, symbols_section,
};

/// Result type for section check functions.
/// - `Some(violation)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<crate::PolicyViolation>;
