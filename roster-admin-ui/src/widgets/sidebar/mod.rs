mod component;

pub use component::Sidebar;
