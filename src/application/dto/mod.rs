pub mod auth;
pub mod categories;
pub mod category_images;
pub mod pagination;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use categories::CategoryDto;
pub use category_images::CategoryImageDto;
pub use pagination::CursorPage;
pub use users::{AvatarDto, CapabilityView, UserDto, UserProfileDto};
