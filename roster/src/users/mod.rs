// Public API
pub mod clock;
pub mod defaults;
pub mod draft;
pub mod error;
pub mod filter;
pub mod memory_repository;
pub mod models;
pub mod repository;
pub mod user_service;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use draft::{DraftField, UserDraft, ValidDraft};
pub use error::{UserError, ValidationError};
pub use filter::{RoleFilter, StatusFilter, UserFilter};
pub use memory_repository::InMemoryUserRepository;
pub use models::{Role, User, UserId};
pub use repository::UserRepository;
pub use user_service::UserService;
