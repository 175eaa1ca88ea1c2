//! Pilot and competition services.

pub mod competition;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use entity::pilot::Gender;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        competition::CompetitionDto,
        drone::DroneDto,
        pilot::{PilotDto, PilotPayload},
    },
    server::{
        data::{
            drone::DroneRepository,
            pilot::{NewPilot, PilotChanges, PilotRepository},
        },
        error::{validation::FieldErrors, Error},
        filter::pilot::{parse_gender, PilotFilter},
        model::db::PilotModel,
        service::{drone::DroneService, parse_payload_integer},
        util::{pagination::PageRequest, url::ApiUrls},
    },
};

/// Human readable label of a gender code
pub fn gender_description(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Male",
        Gender::Female => "Female",
    }
}

pub fn gender_code(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "M",
        Gender::Female => "F",
    }
}

pub struct PilotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PilotService<'a> {
    /// Creates a new instance of [`PilotService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        filter: PilotFilter,
        page: PageRequest,
        urls: &ApiUrls,
    ) -> Result<(Vec<PilotDto>, u64), Error> {
        let (pilots, count) = PilotRepository::new(self.db).list(filter, page).await?;

        Ok((self.to_dtos(pilots, urls).await?, count))
    }

    pub async fn get(&self, id: i32, urls: &ApiUrls) -> Result<Option<PilotDto>, Error> {
        match PilotRepository::new(self.db).get_by_id(id).await? {
            Some(pilot) => Ok(self.to_dtos(vec![pilot], urls).await?.pop()),
            None => Ok(None),
        }
    }

    /// Creates a pilot; gender defaults to male when omitted.
    pub async fn create(&self, payload: PilotPayload, urls: &ApiUrls) -> Result<PilotDto, Error> {
        let changes = validate(&payload, false)?;

        let (Some(name), Some(races_count)) = (changes.name, changes.races_count) else {
            return Err(Error::InternalError(
                "Required pilot fields missing after validation".to_string(),
            ));
        };

        let pilot = PilotRepository::new(self.db)
            .create(NewPilot {
                name,
                gender: changes.gender.unwrap_or(Gender::Male),
                races_count,
            })
            .await?;

        tracing::info!("Created pilot {} ({})", pilot.id, pilot.name);

        Ok(PilotDto {
            url: urls.pilot(pilot.id),
            name: pilot.name,
            gender: gender_code(pilot.gender).to_string(),
            gender_description: gender_description(pilot.gender).to_string(),
            races_count: pilot.races_count,
            inserted_timestamp: pilot.inserted_timestamp,
            competitions: Vec::new(),
        })
    }

    /// Updates a pilot, `Ok(None)` when no pilot has the given ID.
    pub async fn update(
        &self,
        id: i32,
        payload: PilotPayload,
        partial: bool,
        urls: &ApiUrls,
    ) -> Result<Option<PilotDto>, Error> {
        let repo = PilotRepository::new(self.db);

        let Some(pilot) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let changes = validate(&payload, partial)?;
        let pilot = repo.update(pilot, changes).await?;

        Ok(self.to_dtos(vec![pilot], urls).await?.pop())
    }

    /// Deletes a pilot and their competitions, `false` when it does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let result = PilotRepository::new(self.db).delete(id).await?;

        Ok(result.rows_affected > 0)
    }

    async fn to_dtos(&self, pilots: Vec<PilotModel>, urls: &ApiUrls) -> Result<Vec<PilotDto>, Error> {
        let competitions = PilotRepository::new(self.db)
            .load_competitions(&pilots)
            .await?;

        let mut drone_ids: Vec<i32> = competitions
            .iter()
            .flatten()
            .map(|competition| competition.drone_id)
            .collect();
        drone_ids.sort_unstable();
        drone_ids.dedup();

        let drone_models = DroneRepository::new(self.db).get_many(&drone_ids).await?;
        let loaded_ids: Vec<i32> = drone_models.iter().map(|drone| drone.id).collect();
        let drone_dtos = DroneService::new(self.db).to_dtos(drone_models, urls).await?;
        let drones: HashMap<i32, DroneDto> = loaded_ids.into_iter().zip(drone_dtos).collect();

        pilots
            .into_iter()
            .zip(competitions)
            .map(|(pilot, competitions)| {
                let competitions = competitions
                    .into_iter()
                    .map(|competition| {
                        let drone = drones.get(&competition.drone_id).cloned().ok_or_else(|| {
                            Error::InternalError(format!(
                                "Competition {} references missing drone {}",
                                competition.id, competition.drone_id
                            ))
                        })?;

                        Ok(CompetitionDto {
                            url: urls.competition(competition.id),
                            pk: competition.id,
                            distance_in_feet: competition.distance_in_feet,
                            distance_achievement_date: competition.distance_achievement_date,
                            drone,
                        })
                    })
                    .collect::<Result<Vec<_>, Error>>()?;

                Ok(PilotDto {
                    url: urls.pilot(pilot.id),
                    name: pilot.name,
                    gender: gender_code(pilot.gender).to_string(),
                    gender_description: gender_description(pilot.gender).to_string(),
                    races_count: pilot.races_count,
                    inserted_timestamp: pilot.inserted_timestamp,
                    competitions,
                })
            })
            .collect()
    }
}

fn validate(payload: &PilotPayload, partial: bool) -> Result<PilotChanges, FieldErrors> {
    let mut errors = FieldErrors::validate(payload);
    if !partial {
        errors.require("name", &payload.name);
        errors.require("races_count", &payload.races_count);
    }

    let races_count = parse_payload_integer(&mut errors, "races_count", &payload.races_count);

    let gender = payload.gender.as_deref().and_then(|value| {
        let gender = parse_gender(value);
        if gender.is_none() {
            errors.add("gender", format!("\"{}\" is not a valid choice.", value));
        }
        gender
    });

    errors.into_result()?;

    Ok(PilotChanges {
        name: payload.name.clone(),
        gender,
        races_count,
    })
}
