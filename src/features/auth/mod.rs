mod jwks;
mod validator;

pub mod model;

pub use jwks::JwksClient;
pub use model::AuthenticatedUser;
pub use validator::JwtValidator;
