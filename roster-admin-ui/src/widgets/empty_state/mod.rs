mod component;

pub use component::{EmptyAction, EmptyState};
