//! Business logic services

pub mod auth;
pub mod branches;
pub mod catalog;
pub mod members;
pub mod schedules;
pub mod staff;
pub mod transactions;

use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub branches: branches::BranchesService,
    pub staff: staff::StaffService,
    pub members: members::MembersService,
    pub schedules: schedules::SchedulesService,
    pub transactions: transactions::TransactionsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            catalog: catalog::CatalogService::new(repository.clone()),
            branches: branches::BranchesService::new(repository.clone()),
            staff: staff::StaffService::new(repository.clone()),
            members: members::MembersService::new(repository.clone()),
            schedules: schedules::SchedulesService::new(repository.clone()),
            transactions: transactions::TransactionsService::new(repository),
        }
    }
}

/// Run derive-based validation and surface the first message as a 400
pub(crate) fn validate_payload<T: Validate>(data: &T) -> AppResult<()> {
    data.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", field))
                })
            })
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());
        AppError::Validation(message)
    })
}
