pub mod account;
pub mod chat;
pub mod compliance;
pub mod cost;
pub mod finding;

pub use account::*;
pub use chat::*;
pub use compliance::*;
pub use cost::*;
pub use finding::*;
