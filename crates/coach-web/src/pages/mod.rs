//! Page Components

mod home;
mod login;
mod pricing;

pub use home::HomePage;
pub use login::LoginPage;
pub use pricing::PricingPage;
