use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;
use welfare_core::engine::{animal_stats, severity_for};
use welfare_core::entities::Animal;
use welfare_core::enums::{Severity, Trend};
use welfare_core::store::RecordStore;
use welfare_db::updates::animal::{AnimalUpdateBuilder, NewAnimal};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnimalCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AnimalListResponse {
    animals: Vec<Animal>,
}

#[derive(Debug, Serialize)]
struct AnimalDetailResponse {
    animal: Animal,
    evaluations: usize,
    average_score: u8,
    latest_score: Option<u8>,
    trend: Trend,
    alert: Option<Severity>,
}

#[derive(Debug, Serialize)]
struct AnimalDeleteResponse {
    deleted: String,
    evaluations_removed: u64,
}

/// Handle `welfare animal`.
pub async fn handle(
    action: &AnimalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnimalCommands::Add {
            name,
            species,
            birth_date,
            notes,
            photo,
        } => {
            add(
                name,
                species,
                *birth_date,
                notes.as_deref(),
                photo.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        AnimalCommands::List { search } => list(search.as_deref(), ctx, flags).await,
        AnimalCommands::Get { id } => get(id, ctx, flags).await,
        AnimalCommands::Update {
            id,
            name,
            species,
            birth_date,
            notes,
            clear_notes,
        } => {
            let mut builder = AnimalUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(species) = species {
                builder = builder.species(species);
            }
            if let Some(birth_date) = birth_date {
                builder = builder.birth_date(*birth_date);
            }
            if let Some(notes) = notes {
                builder = builder.notes(Some(notes.clone()));
            } else if *clear_notes {
                builder = builder.notes(None);
            }
            let animal = ctx.service.update_animal(id, builder.build()).await?;
            output(&animal, flags.format)
        }
        AnimalCommands::Delete { id } => {
            let evaluations_removed = ctx.service.delete_animal(id).await?;
            output(
                &AnimalDeleteResponse {
                    deleted: id.clone(),
                    evaluations_removed,
                },
                flags.format,
            )
        }
        AnimalCommands::Photo { id, path } => {
            let animal = ctx
                .service
                .attach_photo(&ctx.photos, id, path)
                .await
                .with_context(|| format!("failed to attach photo '{}'", path.display()))?;
            output(&animal, flags.format)
        }
    }
}

async fn add(
    name: &str,
    species: &str,
    birth_date: NaiveDate,
    notes: Option<&str>,
    photo: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut animal = ctx
        .service
        .create_animal(NewAnimal {
            name: name.to_string(),
            species: species.to_string(),
            birth_date,
            photo_url: None,
            notes: notes.map(String::from),
        })
        .await?;

    if let Some(path) = photo {
        animal = ctx
            .service
            .attach_photo(&ctx.photos, &animal.id, path)
            .await
            .with_context(|| {
                format!(
                    "animal {} registered, but storing photo '{}' failed",
                    animal.id,
                    path.display()
                )
            })?;
    }

    output(&animal, flags.format)
}

async fn list(search: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let animals = ctx.service.search_animals(search, Some(limit)).await?;
    output(&AnimalListResponse { animals }, flags.format)
}

async fn get(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let animal = ctx.service.get_animal(id).await?;
    let evaluations = ctx.service.list_evaluations(Some(id)).await?;
    let stats = animal_stats(id, &evaluations);

    output(
        &AnimalDetailResponse {
            animal,
            evaluations: stats.count,
            average_score: stats.average,
            latest_score: stats.latest,
            trend: stats.trend,
            alert: stats.latest.and_then(severity_for),
        },
        flags.format,
    )
}
