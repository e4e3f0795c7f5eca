//! Members service

use crate::{
    error::{AppError, AppResult},
    models::{
        member::{CreateMember, Member, MemberStatus, UpdateMember},
        ListQuery,
    },
    repository::Repository,
    services::validate_payload,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Member>> {
        let members = self.repository.members.list(query).await?;
        if members.is_empty() {
            return Err(AppError::NotFound("No members found".to_string()));
        }
        Ok(members)
    }

    pub async fn create(&self, data: &CreateMember) -> AppResult<Member> {
        let branch_id = data
            .branch_id
            .ok_or_else(|| AppError::Validation("Branch ID is required".to_string()))?;
        let fullname = match data.fullname {
            Some(ref v) if v.trim().len() >= 3 => v.as_str(),
            _ => {
                return Err(AppError::Validation(
                    "Fullname must be at least 3 characters".to_string(),
                ))
            }
        };
        let email = match data.email {
            Some(ref v) if !v.trim().is_empty() => v.as_str(),
            _ => return Err(AppError::Validation("Email is required".to_string())),
        };
        let address = match data.address {
            Some(ref v) if !v.trim().is_empty() => v.as_str(),
            _ => return Err(AppError::Validation("Address is required".to_string())),
        };
        validate_payload(data)?;

        // Branch must exist before the insert
        self.repository.branches.get_by_id(branch_id).await?;

        if self.repository.members.email_exists(email, None).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let status: MemberStatus = data
            .status
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|_| AppError::Validation("Invalid member status".to_string()))?;

        self.repository
            .members
            .create(branch_id, fullname, email, address, status)
            .await
    }

    pub async fn update(&self, id: i32, data: &UpdateMember) -> AppResult<Member> {
        if let Some(ref fullname) = data.fullname {
            if fullname.trim().len() < 3 {
                return Err(AppError::Validation(
                    "Fullname must be at least 3 characters".to_string(),
                ));
            }
        }
        validate_payload(data)?;

        if let Some(branch_id) = data.branch_id {
            self.repository.branches.get_by_id(branch_id).await?;
        }
        if let Some(ref email) = data.email {
            if self.repository.members.email_exists(email, Some(id)).await? {
                return Err(AppError::Conflict("Email already exists".to_string()));
            }
        }

        let status = match data.status {
            Some(ref raw) => Some(
                raw.parse::<MemberStatus>()
                    .map_err(|_| AppError::Validation("Invalid member status".to_string()))?,
            ),
            None => None,
        };

        self.repository.members.update(id, data, status).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.members.delete(id).await
    }
}
