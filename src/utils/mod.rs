pub mod mailto;
pub mod validation;
