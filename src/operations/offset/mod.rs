mod element_offset;

pub use element_offset::ElementOffset;
