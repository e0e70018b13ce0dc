pub mod claims;
pub mod errors;
pub mod hs256;
pub mod rs256;
pub mod signer;

pub use claims::Claims;
pub use errors::TokenError;
pub use hs256::Hs256Signer;
pub use rs256::Rs256Signer;
pub use signer::AlgorithmFamily;
pub use signer::Signer;
pub use signer::TokenSigner;
pub use signer::TOKEN_TTL_HOURS;
