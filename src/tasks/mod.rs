//! Task model, storage and list operations

pub mod error;
pub mod model;
pub mod ops;
pub mod storage;

pub use error::{StorageError, TaskError};
pub use model::{Status, Task, TaskList};
pub use ops::{parse_index, Completion};
pub use storage::{Loaded, Recovery, TaskStore};
