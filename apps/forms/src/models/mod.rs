pub mod contact;
pub mod job;
