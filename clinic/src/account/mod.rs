// clinic/src/account/mod.rs

pub mod account_service;

pub use account_service::AccountService;
