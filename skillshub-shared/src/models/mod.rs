pub mod auth;
pub mod errors;
pub mod order;
pub mod page;
pub mod preferences;
pub mod skill;
pub mod stats;
pub mod user;

pub use auth::{
    ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse, OAuthAccount,
    OAuthUrlResponse, ProfileUpdate, RegisterRequest,
};
pub use errors::ApiError;
pub use order::{Order, OrderStatus, PaymentUrlResponse};
pub use page::Page;
pub use preferences::Preferences;
pub use skill::{Category, DownloadResponse, PriceType, Skill};
pub use stats::{ActivityItem, AdminOverview, PlatformStats, UserDashboardStats};
pub use user::{User, UserRole};
