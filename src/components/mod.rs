//! UI Components

mod new_item_form;
mod theme_selector;
mod todo_list;
mod todo_row;

pub use new_item_form::NewItemForm;
pub use theme_selector::ThemeSelector;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
