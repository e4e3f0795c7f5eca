//! Staff management service

use crate::{
    error::{AppError, AppResult},
    models::{
        staff::{CreateStaff, Staff, StaffRole, UpdateStaff},
        ListQuery,
    },
    repository::Repository,
    services::{auth::hash_password, validate_payload},
};

#[derive(Clone)]
pub struct StaffService {
    repository: Repository,
}

impl StaffService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Staff>> {
        let staff = self.repository.staff.list(query).await?;
        if staff.is_empty() {
            return Err(AppError::NotFound("No staff found".to_string()));
        }
        Ok(staff)
    }

    pub async fn create(&self, data: &CreateStaff) -> AppResult<Staff> {
        let branch_id = data
            .branch_id
            .ok_or_else(|| AppError::Validation("Branch ID is required".to_string()))?;
        let name = match data.staff_name {
            Some(ref v) if v.trim().len() >= 3 => v.as_str(),
            _ => {
                return Err(AppError::Validation(
                    "Staff name must be at least 3 characters".to_string(),
                ))
            }
        };
        let email = match data.staff_email {
            Some(ref v) if !v.trim().is_empty() => v.as_str(),
            _ => return Err(AppError::Validation("Staff email is required".to_string())),
        };
        let password = match data.password {
            Some(ref v) if v.len() >= 6 => v.as_str(),
            Some(_) => {
                return Err(AppError::Validation(
                    "Password must be at least 6 characters".to_string(),
                ))
            }
            None => return Err(AppError::Validation("Password is required".to_string())),
        };
        validate_payload(data)?;

        // Branch must exist before the insert
        self.repository.branches.get_by_id(branch_id).await?;

        if self.repository.staff.email_exists(email, None).await? {
            return Err(AppError::Conflict("Staff email already exists".to_string()));
        }

        let role: StaffRole = data
            .staff_role
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|_| AppError::Validation("Invalid staff role".to_string()))?;

        let hash = hash_password(password)?;

        self.repository
            .staff
            .create(branch_id, name, email, role, &hash)
            .await
    }

    pub async fn update(&self, id: i32, data: &UpdateStaff) -> AppResult<Staff> {
        if let Some(ref name) = data.staff_name {
            if name.trim().len() < 3 {
                return Err(AppError::Validation(
                    "Staff name must be at least 3 characters".to_string(),
                ));
            }
        }
        validate_payload(data)?;

        if let Some(branch_id) = data.branch_id {
            self.repository.branches.get_by_id(branch_id).await?;
        }
        if let Some(ref email) = data.staff_email {
            if self.repository.staff.email_exists(email, Some(id)).await? {
                return Err(AppError::Conflict("Staff email already exists".to_string()));
            }
        }

        let role = match data.staff_role {
            Some(ref raw) => Some(
                raw.parse::<StaffRole>()
                    .map_err(|_| AppError::Validation("Invalid staff role".to_string()))?,
            ),
            None => None,
        };

        let hash = match data.password {
            Some(ref password) if password.len() >= 6 => Some(hash_password(password)?),
            Some(_) => {
                return Err(AppError::Validation(
                    "Password must be at least 6 characters".to_string(),
                ))
            }
            None => None,
        };

        self.repository.staff.update(id, data, role, hash).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.staff.delete(id).await
    }
}
