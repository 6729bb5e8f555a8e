pub mod angle;
pub mod constants;
pub mod controller;
pub mod session;
pub mod value;

pub use angle::*;
pub use controller::*;
pub use session::*;
pub use value::*;
