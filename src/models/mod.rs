// Read-only views of the records owned by the backing store

pub mod training_session;
pub mod performance_record;
pub mod training_goal;

pub use training_session::*;
pub use performance_record::*;
pub use training_goal::*;
