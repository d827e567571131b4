pub mod config_service;
pub mod in_memory_case_repository;
pub mod paths;
pub mod secret_service;

pub use crate::config_service::ConfigService;
pub use crate::in_memory_case_repository::InMemoryCaseRepository;
pub use crate::secret_service::SecretServiceImpl;
