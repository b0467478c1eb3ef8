use chrono::{DateTime, Utc};
use serde::Serialize;
use welfare_core::engine::{CategoryScore, category_breakdown};
use welfare_core::entities::{Evaluation, NewEvaluation};
use welfare_core::store::RecordStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EvaluationCommands;
use crate::commands::shared::answers::parse_answers;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct EvaluationDetailResponse {
    evaluation: Evaluation,
    breakdown: Vec<CategoryScore>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unanswered: Vec<String>,
}

/// One line of `evaluation list`; responses are counted, not listed.
#[derive(Debug, Serialize)]
struct EvaluationRow {
    id: String,
    animal_id: String,
    evaluated_at: DateTime<Utc>,
    evaluator: String,
    global_score: u8,
    responses: usize,
}

impl From<Evaluation> for EvaluationRow {
    fn from(e: Evaluation) -> Self {
        Self {
            responses: e.responses.len(),
            id: e.id,
            animal_id: e.animal_id,
            evaluated_at: e.evaluated_at,
            evaluator: e.evaluator,
            global_score: e.global_score,
        }
    }
}

#[derive(Debug, Serialize)]
struct EvaluationListResponse {
    evaluations: Vec<EvaluationRow>,
}

#[derive(Debug, Serialize)]
struct EvaluationDeleteResponse {
    deleted: String,
}

/// Handle `welfare evaluation`.
pub async fn handle(
    action: &EvaluationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EvaluationCommands::Submit {
            animal,
            answers,
            allow_incomplete,
            evaluator,
            role,
            enclosure,
            confidence,
            at,
            notes,
        } => {
            let submission = NewEvaluation {
                animal_id: animal.clone(),
                evaluator: evaluator.clone().unwrap_or_default(),
                evaluator_role: role.clone(),
                enclosure: enclosure.clone(),
                confidence: *confidence,
                evaluated_at: *at,
                answers: parse_answers(answers)?,
                notes: notes.clone(),
                allow_incomplete: *allow_incomplete,
            };
            let evaluation = ctx.service.submit_evaluation(submission).await?;
            output(&detail(evaluation, ctx), flags.format)
        }
        EvaluationCommands::List { animal } => {
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            let evaluations = ctx
                .service
                .find_evaluations(animal.as_deref(), Some(limit))
                .await?;
            output(
                &EvaluationListResponse {
                    evaluations: evaluations.into_iter().map(EvaluationRow::from).collect(),
                },
                flags.format,
            )
        }
        EvaluationCommands::Get { id } => {
            let evaluation = ctx.service.get_evaluation(id).await?;
            output(&detail(evaluation, ctx), flags.format)
        }
        EvaluationCommands::Delete { id } => {
            ctx.service.delete_evaluation(id).await?;
            output(
                &EvaluationDeleteResponse { deleted: id.clone() },
                flags.format,
            )
        }
    }
}

fn detail(evaluation: Evaluation, ctx: &AppContext) -> EvaluationDetailResponse {
    let questions = ctx.service.questions();
    let breakdown = category_breakdown(questions, &evaluation.responses);
    let unanswered = questions
        .iter()
        .filter(|q| {
            !evaluation
                .responses
                .iter()
                .any(|r| r.question_id == q.id)
        })
        .map(|q| q.id.clone())
        .collect();
    EvaluationDetailResponse {
        evaluation,
        breakdown,
        unanswered,
    }
}
