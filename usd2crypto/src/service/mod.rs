pub mod allocator;
pub mod rate;
