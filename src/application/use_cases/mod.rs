pub mod health;
pub mod waitlist;
