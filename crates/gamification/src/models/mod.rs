mod gamification_record;
mod raw_field;
mod roster_entry;

pub use gamification_record::GamificationRecord;
pub use raw_field::RawField;
pub use roster_entry::{NO_CLASS, RosterEntry};
