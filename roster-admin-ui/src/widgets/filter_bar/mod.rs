mod component;

pub use component::FilterBar;
