mod escape;


pub use escape::{escape_class_name, is_plain_identifier};
