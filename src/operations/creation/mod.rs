mod compute_elements;

pub use compute_elements::ComputeElements;
