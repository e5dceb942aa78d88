pub mod catalog;
pub mod dedup;
pub mod mapper;
pub mod validator;
