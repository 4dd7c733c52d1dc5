pub mod admin;
pub mod enter;
pub mod oracle;
pub mod upkeep;
