pub mod appointment;
pub mod counselor;
pub mod invoice;
pub mod message;
pub mod role;
pub mod user;
