pub mod address;
pub mod account;
pub mod constants;
pub mod errors;
pub mod idl;
pub mod instruction;
