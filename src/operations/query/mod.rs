mod find_element;
mod length;

pub use find_element::FindElementAt;
pub use length::Length;
