pub mod errors;
pub mod memory;
pub mod ports;

pub use errors::RepositoryError;
pub use memory::InMemoryUserRepository;
pub use memory::MemoryUser;
pub use ports::AuthUser;
pub use ports::UserRepository;
