pub mod completion;
pub mod todo;

pub use completion::{CompletionBodyError, extract_completion_percentage};
pub use todo::{NewTodoItem, TodoItem, TodoItemInput};
