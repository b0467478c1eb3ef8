//! Animal repository: registration, lookup, search, partial update, deletion.

use welfare_core::entities::Animal;
use welfare_core::ids::PREFIX_ANIMAL;

use crate::error::DatabaseError;
use crate::helpers::{
    contains_pattern, format_datetime, get_opt_string, non_blank, now, parse_date, parse_datetime,
    search_key,
};
use crate::service::WelfareService;
use crate::updates::animal::{AnimalUpdate, NewAnimal};

const ANIMAL_COLUMNS: &str =
    "id, name, species, birth_date, photo_url, notes, created_at, updated_at";

fn row_to_animal(row: &libsql::Row) -> Result<Animal, DatabaseError> {
    Ok(Animal {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        species: row.get::<String>(2)?,
        birth_date: parse_date(&row.get::<String>(3)?)?,
        photo_url: get_opt_string(row, 4)?,
        notes: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

fn required(field: &str, value: &str) -> Result<String, DatabaseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DatabaseError::invalid(format!("animal {field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

impl WelfareService {
    /// Register a new animal.
    ///
    /// # Errors
    ///
    /// Returns a validation error when name or species is blank, or
    /// `DatabaseError` if the insert fails.
    pub async fn create_animal(&self, input: NewAnimal) -> Result<Animal, DatabaseError> {
        let name = required("name", &input.name)?;
        let species = required("species", &input.species)?;
        let photo_url = non_blank(input.photo_url.as_deref());
        let notes = non_blank(input.notes.as_deref());

        let now = now();
        let id = self.db().generate_id(PREFIX_ANIMAL).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO animals (id, name, species, name_key, species_key, birth_date, photo_url, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                libsql::params![
                    id.as_str(),
                    name.as_str(),
                    species.as_str(),
                    search_key(&name),
                    search_key(&species),
                    input.birth_date.to_string(),
                    photo_url.as_deref(),
                    notes.as_deref(),
                    format_datetime(&now),
                    format_datetime(&now)
                ],
            )
            .await?;

        tracing::info!(animal_id = %id, name = %name, "registered animal");

        Ok(Animal {
            id,
            name,
            species,
            birth_date: input.birth_date,
            photo_url,
            notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// Fetch one animal.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no animal has this id.
    pub async fn get_animal(&self, id: &str) -> Result<Animal, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {ANIMAL_COLUMNS} FROM animals WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("animal", id))?;
        row_to_animal(&row)
    }

    /// List animals ordered by name, optionally filtered by a case-insensitive
    /// substring of name or species.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn search_animals(
        &self,
        query: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<Animal>, DatabaseError> {
        let limit_clause = limit.map(|n| format!(" LIMIT {n}")).unwrap_or_default();
        let needle = query.map(str::trim).filter(|q| !q.is_empty());

        let mut rows = match needle {
            Some(needle) => {
                let sql = format!(
                    "SELECT {ANIMAL_COLUMNS} FROM animals
                     WHERE name_key LIKE ?1 ESCAPE '\\' OR species_key LIKE ?1 ESCAPE '\\'
                     ORDER BY name, id{limit_clause}"
                );
                self.db()
                    .conn()
                    .query(&sql, [contains_pattern(needle)])
                    .await?
            }
            None => {
                let sql =
                    format!("SELECT {ANIMAL_COLUMNS} FROM animals ORDER BY name, id{limit_clause}");
                self.db().conn().query(&sql, ()).await?
            }
        };

        let mut animals = Vec::new();
        while let Some(row) = rows.next().await? {
            animals.push(row_to_animal(&row)?);
        }
        tracing::debug!(count = animals.len(), query = ?needle, "listed animals");
        Ok(animals)
    }

    /// Apply a partial update. An empty update returns the animal unchanged.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id, a validation error when
    /// name or species would become blank, or `DatabaseError` on failure.
    pub async fn update_animal(
        &self,
        animal_id: &str,
        update: AnimalUpdate,
    ) -> Result<Animal, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref name) = update.name {
            let name = required("name", name)?;
            sets.push(format!("name = ?{idx}, name_key = ?{}", idx + 1));
            let key = search_key(&name);
            params.push(name.into());
            params.push(key.into());
            idx += 2;
        }
        if let Some(ref species) = update.species {
            let species = required("species", species)?;
            sets.push(format!("species = ?{idx}, species_key = ?{}", idx + 1));
            let key = search_key(&species);
            params.push(species.into());
            params.push(key.into());
            idx += 2;
        }
        if let Some(birth_date) = update.birth_date {
            sets.push(format!("birth_date = ?{idx}"));
            params.push(birth_date.to_string().into());
            idx += 1;
        }
        if let Some(ref photo_url) = update.photo_url {
            sets.push(format!("photo_url = ?{idx}"));
            params.push(non_blank(photo_url.as_deref()).into());
            idx += 1;
        }
        if let Some(ref notes) = update.notes {
            sets.push(format!("notes = ?{idx}"));
            params.push(non_blank(notes.as_deref()).into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_animal(animal_id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(format_datetime(&now()).into());
        idx += 1;

        params.push(animal_id.into());
        let sql = format!("UPDATE animals SET {} WHERE id = ?{idx}", sets.join(", "));

        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("animal", animal_id));
        }

        let detail = serde_json::to_string(&update).map_err(|e| DatabaseError::Other(e.into()))?;
        tracing::info!(animal_id, %detail, "updated animal");

        self.get_animal(animal_id).await
    }

    /// Point the animal's photo reference at an already stored file.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id.
    pub async fn set_animal_photo(
        &self,
        animal_id: &str,
        photo_url: &str,
    ) -> Result<Animal, DatabaseError> {
        let update = AnimalUpdate {
            photo_url: Some(Some(photo_url.to_string())),
            ..AnimalUpdate::default()
        };
        self.update_animal(animal_id, update).await
    }

    /// Delete an animal together with its evaluations and their responses.
    ///
    /// Returns the number of evaluations removed by the cascade.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id.
    pub async fn delete_animal(&self, animal_id: &str) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COUNT(*) FROM evaluations WHERE animal_id = ?1",
                [animal_id],
            )
            .await?;
        let cascaded = rows
            .next()
            .await?
            .ok_or(DatabaseError::NoResult)?
            .get::<i64>(0)?;

        let deleted = self
            .db()
            .conn()
            .execute("DELETE FROM animals WHERE id = ?1", [animal_id])
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::not_found("animal", animal_id));
        }

        tracing::info!(animal_id, evaluations = cascaded, "deleted animal");
        u64::try_from(cascaded).map_err(|e| DatabaseError::InvalidState(e.to_string()))
    }
}
