//! Route-level page components.

pub mod category;
pub mod home;
pub mod login;
pub mod product;
pub mod register;

pub use category::CategoryPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use product::ProductPage;
pub use register::RegisterPage;
