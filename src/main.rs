// ==========================================
// Learner Record Validation - CLI Entry Point
// ==========================================
// Usage: learner-validation <batch.json> [reference-data.json]
// Loads a parsed batch, populates all caches, and logs a summary;
// exits non-zero naming the failing step on population failure.
// ==========================================

use anyhow::Context;
use learner_validation::external::{
    FrameworkDetail, InMemoryLearnerNumberSource, InMemoryQualificationSource,
    QualificationDetail,
};
use learner_validation::{logging, AcademicYear, Message, PopulationOrchestrator};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Optional reference-data bundle for the in-memory sources.
#[derive(Debug, Default, Deserialize)]
struct ReferenceData {
    #[serde(default)]
    qualifications: Vec<QualificationDetail>,
    #[serde(default)]
    frameworks: Vec<FrameworkDetail>,
    #[serde(default)]
    learner_numbers: HashSet<i64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", learner_validation::APP_NAME);
    tracing::info!("version: {}", learner_validation::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let batch_path = args
        .next()
        .context("usage: learner-validation <batch.json> [reference-data.json]")?;

    let raw = std::fs::read_to_string(&batch_path)
        .with_context(|| format!("failed to read batch file {batch_path}"))?;
    let message: Message =
        serde_json::from_str(&raw).context("batch file is not a valid message")?;

    let reference = match args.next() {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read reference data {path}"))?;
            serde_json::from_str(&raw).context("reference data file is not valid")?
        }
        None => ReferenceData::default(),
    };

    let mut orchestrator = PopulationOrchestrator::new(
        learner_validation::EMBEDDED_LOOKUPS,
        AcademicYear::for_collection_year(2025),
        Arc::new(InMemoryQualificationSource::new(
            reference.qualifications,
            reference.frameworks,
        )),
        Arc::new(InMemoryLearnerNumberSource::new(reference.learner_numbers)),
    );

    let context = orchestrator
        .populate(message)
        .await
        .context("cache population failed; validation run aborted")?;

    tracing::info!(
        learners = context.file_data().learners().len(),
        qualifications = context.external().learning_deliveries().len(),
        frameworks = context.external().frameworks().len(),
        learner_numbers = context.external().learner_numbers().len(),
        "caches ready for rule evaluation"
    );

    Ok(())
}
