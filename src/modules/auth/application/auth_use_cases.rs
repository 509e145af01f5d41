use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::{
    CallerProfileUseCase, CreateAdminSessionUseCase, LogoutAdminUseCase,
    ValidateAdminSessionUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub create_session: Arc<dyn CreateAdminSessionUseCase + Send + Sync>,
    pub validate_session: Arc<dyn ValidateAdminSessionUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutAdminUseCase + Send + Sync>,
    pub profile: Arc<dyn CallerProfileUseCase + Send + Sync>,
}
