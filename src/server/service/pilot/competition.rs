use sea_orm::DatabaseConnection;

use crate::{
    model::competition::{CompetitionPayload, PilotCompetitionDto},
    server::{
        data::{
            drone::DroneRepository,
            pilot::{
                competition::{CompetitionChanges, CompetitionRepository, NewCompetition},
                PilotRepository,
            },
        },
        error::{validation::FieldErrors, Error},
        filter::competition::CompetitionFilter,
        model::db::CompetitionModel,
        service::{missing_object, parse_payload_datetime, parse_payload_integer},
        util::{pagination::PageRequest, url::ApiUrls},
    },
};

pub struct CompetitionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionService<'a> {
    /// Creates a new instance of [`CompetitionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        filter: CompetitionFilter,
        page: PageRequest,
        urls: &ApiUrls,
    ) -> Result<(Vec<PilotCompetitionDto>, u64), Error> {
        let (competitions, count) = CompetitionRepository::new(self.db)
            .list(filter, page)
            .await?;

        Ok((self.to_dtos(competitions, urls).await?, count))
    }

    pub async fn get(&self, id: i32, urls: &ApiUrls) -> Result<Option<PilotCompetitionDto>, Error> {
        match CompetitionRepository::new(self.db).get_by_id(id).await? {
            Some(competition) => Ok(self.to_dtos(vec![competition], urls).await?.pop()),
            None => Ok(None),
        }
    }

    /// Records a competition result for a pilot and drone referenced by name.
    pub async fn create(
        &self,
        payload: CompetitionPayload,
        urls: &ApiUrls,
    ) -> Result<PilotCompetitionDto, Error> {
        let changes = self.validate(&payload, false).await?;

        let (Some(pilot_id), Some(drone_id), Some(distance_in_feet), Some(date)) = (
            changes.pilot_id,
            changes.drone_id,
            changes.distance_in_feet,
            changes.distance_achievement_date,
        ) else {
            return Err(Error::InternalError(
                "Required competition fields missing after validation".to_string(),
            ));
        };

        let competition = CompetitionRepository::new(self.db)
            .create(NewCompetition {
                pilot_id,
                drone_id,
                distance_in_feet,
                distance_achievement_date: date,
            })
            .await?;

        tracing::info!(
            "Recorded competition {} for pilot {} with drone {}",
            competition.id,
            pilot_id,
            drone_id
        );

        self.to_dto(competition, urls).await
    }

    /// Updates a competition, `Ok(None)` when no competition has the given ID.
    pub async fn update(
        &self,
        id: i32,
        payload: CompetitionPayload,
        partial: bool,
        urls: &ApiUrls,
    ) -> Result<Option<PilotCompetitionDto>, Error> {
        let repo = CompetitionRepository::new(self.db);

        let Some(competition) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let changes = self.validate(&payload, partial).await?;
        let competition = repo.update(competition, changes).await?;

        Ok(Some(self.to_dto(competition, urls).await?))
    }

    /// Deletes a competition, `false` when it does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let result = CompetitionRepository::new(self.db).delete(id).await?;

        Ok(result.rows_affected > 0)
    }

    async fn to_dto(
        &self,
        competition: CompetitionModel,
        urls: &ApiUrls,
    ) -> Result<PilotCompetitionDto, Error> {
        let competition_id = competition.id;

        self.to_dtos(vec![competition], urls)
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to build DTO for competition {}",
                    competition_id
                ))
            })
    }

    async fn to_dtos(
        &self,
        competitions: Vec<CompetitionModel>,
        urls: &ApiUrls,
    ) -> Result<Vec<PilotCompetitionDto>, Error> {
        let (pilots, drones) = CompetitionRepository::new(self.db)
            .load_relations(&competitions)
            .await?;

        competitions
            .into_iter()
            .zip(pilots)
            .zip(drones)
            .map(|((competition, pilot), drone)| {
                let (Some(pilot), Some(drone)) = (pilot, drone) else {
                    return Err(Error::InternalError(format!(
                        "Competition {} references a missing pilot or drone",
                        competition.id
                    )));
                };

                Ok(PilotCompetitionDto {
                    url: urls.competition(competition.id),
                    pk: competition.id,
                    distance_in_feet: competition.distance_in_feet,
                    distance_achievement_date: competition.distance_achievement_date,
                    pilot: pilot.name,
                    drone: drone.name,
                })
            })
            .collect()
    }

    async fn validate(
        &self,
        payload: &CompetitionPayload,
        partial: bool,
    ) -> Result<CompetitionChanges, Error> {
        let mut errors = FieldErrors::new();
        if !partial {
            errors.require("distance_in_feet", &payload.distance_in_feet);
            errors.require("distance_achievement_date", &payload.distance_achievement_date);
            errors.require("pilot", &payload.pilot);
            errors.require("drone", &payload.drone);
        }

        let distance_in_feet =
            parse_payload_integer(&mut errors, "distance_in_feet", &payload.distance_in_feet);
        let distance_achievement_date = parse_payload_datetime(
            &mut errors,
            "distance_achievement_date",
            &payload.distance_achievement_date,
        );

        let mut pilot_id = None;
        if let Some(name) = payload.pilot.as_deref() {
            match PilotRepository::new(self.db).get_by_name(name).await? {
                Some(pilot) => pilot_id = Some(pilot.id),
                None => errors.add("pilot", missing_object(name)),
            }
        }

        let mut drone_id = None;
        if let Some(name) = payload.drone.as_deref() {
            match DroneRepository::new(self.db).get_by_name(name).await? {
                Some(drone) => drone_id = Some(drone.id),
                None => errors.add("drone", missing_object(name)),
            }
        }

        errors.into_result()?;

        Ok(CompetitionChanges {
            pilot_id,
            drone_id,
            distance_in_feet,
            distance_achievement_date,
        })
    }
}
