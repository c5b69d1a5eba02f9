pub mod fields;
pub mod forms;
pub mod session_row;
