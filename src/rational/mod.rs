pub mod forms;
pub mod recurrence;

pub use forms::*;
pub use recurrence::*;
