use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::clan::ClanRepository,
    error::AppError,
    model::{
        clan::{Clan, ClanSort, CreateClanParams, UpdateClanParams},
        page::{Page, PageRequest, SortDirection},
        player::PlayerProfile,
    },
    service::player::build_profiles,
};

const DEFAULT_SORT: [(ClanSort, SortDirection); 1] = [(ClanSort::Id, SortDirection::Desc)];

pub struct ClanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new clan
    ///
    /// Fails with `BadRequest` if the name is already taken.
    pub async fn create(&self, params: CreateClanParams) -> Result<Clan, AppError> {
        let repo = ClanRepository::new(self.db);

        self.ensure_name_available(&params.name, None).await?;

        let name = params.name.clone();
        let clan = repo
            .create(params)
            .await
            .map_err(|e| name_taken(e, &name))?;
        tracing::info!(clan_id = clan.id, name = %clan.name, "Created clan");

        Ok(Clan::from_entity(clan))
    }

    /// Gets a clan and its current member count
    pub async fn get_by_id(&self, id: i32) -> Result<(Clan, u64), AppError> {
        let repo = ClanRepository::new(self.db);

        let clan = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Clan", id))?;
        let member_count = repo
            .member_counts(&[id])
            .await?
            .get(&id)
            .copied()
            .unwrap_or(0);

        Ok((Clan::from_entity(clan), member_count))
    }

    /// Gets a page of clans paired with their member counts
    pub async fn get_paginated(
        &self,
        include_deleted: bool,
        request: &PageRequest,
    ) -> Result<Page<(Clan, u64)>, AppError> {
        let repo = ClanRepository::new(self.db);
        let sort = request.resolve_sort(&DEFAULT_SORT)?;

        let (clans, total) = repo
            .get_paginated(include_deleted, &sort, request.page, request.size)
            .await?;

        let ids: Vec<i32> = clans.iter().map(|c| c.id).collect();
        let counts = repo.member_counts(&ids).await?;

        let items = clans
            .into_iter()
            .map(|clan| {
                let count = counts.get(&clan.id).copied().unwrap_or(0);
                (Clan::from_entity(clan), count)
            })
            .collect();

        Ok(Page::new(items, total, request))
    }

    /// Updates a clan
    ///
    /// Renaming to a name held by another clan fails with `BadRequest`.
    pub async fn update(&self, params: UpdateClanParams) -> Result<(Clan, u64), AppError> {
        let repo = ClanRepository::new(self.db);
        let id = params.id;

        if let Some(name) = &params.name {
            self.ensure_name_available(name, Some(id)).await?;
        }

        let name = params.name.clone();
        repo.update(params)
            .await
            .map_err(|e| match &name {
                Some(name) => name_taken(e, name),
                None => e.into(),
            })?
            .ok_or_else(|| AppError::not_found("Clan", id))?;
        tracing::info!(clan_id = id, "Updated clan");

        self.get_by_id(id).await
    }

    /// Soft deletes a clan
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ClanRepository::new(self.db);

        repo.soft_delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Clan", id))?;
        tracing::info!(clan_id = id, "Deleted clan");

        Ok(())
    }

    /// Gets the players currently in a clan
    pub async fn members(&self, id: i32) -> Result<Vec<PlayerProfile>, AppError> {
        let repo = ClanRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Clan", id));
        }

        let players = repo.members(id).await?;

        build_profiles(self.db, players).await
    }

    async fn ensure_name_available(&self, name: &str, own_id: Option<i32>) -> Result<(), AppError> {
        let repo = ClanRepository::new(self.db);

        match repo.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != own_id => {
                tracing::warn!(name = %name, "Rejected duplicate clan name");
                Err(AppError::BadRequest(format!(
                    "Clan name already exists: {}",
                    name
                )))
            }
            _ => Ok(()),
        }
    }
}

fn name_taken(err: DbErr, name: &str) -> AppError {
    AppError::unique_violation(err, || format!("Clan name already exists: {}", name))
}
