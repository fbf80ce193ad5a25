// store/src/repository/mod.rs
//! Entity-scoped database operations, one module per table. Functions
//! take `&Connection` so a caller can run several of them inside one
//! transaction (the seed does exactly that).

pub mod appointments;
pub mod doctors;
pub mod patients;
pub mod users;
