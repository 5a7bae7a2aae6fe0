pub mod help_support;
pub mod home;
