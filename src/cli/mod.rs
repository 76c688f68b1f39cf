pub mod decrypt;
pub mod encrypt;
pub mod info;
pub mod keys;
pub mod prime;

pub use decrypt::*;
pub use encrypt::*;
pub use info::*;
pub use keys::*;
pub use prime::*;
