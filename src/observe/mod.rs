pub mod sdk;
pub mod watch;

pub use sdk::*;
pub use watch::*;
