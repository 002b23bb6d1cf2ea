pub mod cache;
pub mod language;
pub mod rate_limit;
pub mod security;
