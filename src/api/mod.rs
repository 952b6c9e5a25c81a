pub mod http;
pub mod traits;

pub use http::HttpPortfolioApi;
pub use traits::PortfolioApi;
