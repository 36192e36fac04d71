mod size;

pub use size::Size;
