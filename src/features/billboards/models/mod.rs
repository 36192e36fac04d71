mod billboard;

pub use billboard::Billboard;
