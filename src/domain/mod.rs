mod account;
mod customer;
mod money;
mod rating;
mod validate;

pub use account::*;
pub use customer::*;
pub use money::*;
pub use rating::*;
pub use validate::*;
