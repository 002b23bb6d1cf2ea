pub mod forms;
pub mod web;
pub mod wizard;
