pub mod order;
pub mod service;
pub mod user;

pub use order::*;
pub use service::*;
pub use user::*;
