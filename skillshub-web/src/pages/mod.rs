pub mod admin;
pub mod auth_callback;
pub mod categories;
pub mod dashboard;
pub mod error;
pub mod home;
pub mod login;
pub mod mock_pay;
pub mod skill_detail;
pub mod skills;

pub use auth_callback::AuthCallbackPage;
pub use categories::CategoriesPage;
pub use error::ErrorPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use mock_pay::MockPayPage;
pub use skill_detail::SkillDetailPage;
pub use skills::SkillsPage;
