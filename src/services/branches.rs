//! Branches service

use crate::{
    error::{AppError, AppResult},
    models::{
        branch::{Branch, BranchDetail, CreateBranch, UpdateBranch},
        ListQuery,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BranchesService {
    repository: Repository,
}

impl BranchesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Branch>> {
        let branches = self.repository.branches.list(query).await?;
        if branches.is_empty() {
            return Err(AppError::NotFound("No branches found".to_string()));
        }
        Ok(branches)
    }

    /// Branch detail with nested members
    pub async fn get_detail(&self, id: i32) -> AppResult<BranchDetail> {
        self.repository.branches.get_detail(id).await
    }

    pub async fn create(&self, data: &CreateBranch) -> AppResult<Branch> {
        let name = match data.branch_name {
            Some(ref v) if v.trim().len() >= 3 => v.as_str(),
            _ => {
                return Err(AppError::Validation(
                    "Branch name must be at least 3 characters".to_string(),
                ))
            }
        };
        let address = match data.branch_address {
            Some(ref v) if !v.trim().is_empty() => v.as_str(),
            _ => {
                return Err(AppError::Validation(
                    "Branch address is required".to_string(),
                ))
            }
        };

        if self.repository.branches.name_exists(name, None).await? {
            return Err(AppError::Conflict("Branch name already exists".to_string()));
        }

        self.repository.branches.create(name, address).await
    }

    pub async fn update(&self, id: i32, data: &UpdateBranch) -> AppResult<Branch> {
        if let Some(ref name) = data.branch_name {
            if name.trim().len() < 3 {
                return Err(AppError::Validation(
                    "Branch name must be at least 3 characters".to_string(),
                ));
            }
            if self.repository.branches.name_exists(name, Some(id)).await? {
                return Err(AppError::Conflict("Branch name already exists".to_string()));
            }
        }
        if let Some(ref address) = data.branch_address {
            if address.trim().is_empty() {
                return Err(AppError::Validation(
                    "Branch address is required".to_string(),
                ));
            }
        }

        self.repository.branches.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.branches.delete(id).await
    }
}
