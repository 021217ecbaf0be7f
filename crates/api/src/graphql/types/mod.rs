//! GraphQL object and input types.

mod address;
pub mod connection;
mod payloads;
mod user;
mod validation;

pub use address::{AddressInput, AddressNode, CountryDisplay};
pub use connection::{TotalCount, UserConnection};
pub use payloads::{
    AddressPayload, ErrorsPayload, TokenCreatePayload, TokenPayload, TokenRefreshPayload,
    TokenVerifyPayload, UserPayload,
};
pub use user::{PermissionDisplay, PermissionEnum, UserNode};
pub use validation::{AddressValidationData, AddressValidationInput};
