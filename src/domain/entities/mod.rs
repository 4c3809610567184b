pub mod backend_kind;
pub mod waitlist_entry;
