pub mod day_record;
pub mod day_summary;
pub mod identity;
pub mod punch_kind;
pub mod session;
pub mod status;
