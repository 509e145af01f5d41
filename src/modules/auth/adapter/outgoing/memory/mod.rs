mod profile_repository_memory;
mod session_repository_memory;

pub use profile_repository_memory::InMemoryProfileRepository;
pub use session_repository_memory::InMemoryAdminSessionRepository;
