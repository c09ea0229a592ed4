mod component;

pub use component::UserModal;
