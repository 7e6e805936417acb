pub mod error;
pub mod intent;
pub mod response;
pub mod scenario;
pub mod variable;

pub use error::ParseError;
pub use intent::*;
pub use response::*;
pub use scenario::*;
pub use variable::*;
