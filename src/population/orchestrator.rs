// ==========================================
// Learner Record Validation - Population Orchestrator
// ==========================================
// Responsibility: sequence message population before everything that
//                 reads from it, fan the three independent population
//                 steps out concurrently, and only hand caches to the
//                 rule engine when all of them finished
// Red line: no partially populated context is ever observable; a
//           failed step fails the whole run
// ==========================================

use crate::cache::{
    CacheError, ExternalDataCache, FileDataCache, InternalDataCache, MessageCache,
};
use crate::domain::types::AcademicYear;
use crate::domain::Message;
use crate::external::sources::{ExternalSourceError, LearnerNumberSource, QualificationSource};
use crate::external::CrossReferenceExtractor;
use crate::lookup::{LookupBuilder, LookupError};
use futures::future::{pending, try_join3};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{error, info, warn};

// ==========================================
// PopulationState
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationState {
    NotStarted,
    Populating,
    Complete,
    Failed,
}

// ==========================================
// PopulationError - first failure wins
// ==========================================
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PopulationError {
    #[error("message population failed: {0}")]
    Message(#[from] CacheError),

    #[error("reference lookup build failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("external reference extraction failed: {0}")]
    External(#[from] ExternalSourceError),

    #[error("population cancelled by shutdown signal")]
    Cancelled,

    #[error("population already ran for this orchestrator; build a new one per run")]
    AlreadyRan,
}

impl PopulationError {
    /// Which population step failed, for run-abort reporting.
    pub fn failed_step(&self) -> &'static str {
        match self {
            PopulationError::Message(_) => "message",
            PopulationError::Lookup(_) => "reference-lookup",
            PopulationError::External(_) => "cross-reference",
            PopulationError::Cancelled => "cancelled",
            PopulationError::AlreadyRan => "orchestrator",
        }
    }
}

// ==========================================
// ValidationContext - read-only view for rule evaluation
// ==========================================
// Only constructed after every population step succeeded, so "not
// yet populated" is unrepresentable for consumers. Immutable for the
// rest of the run; rules may read it from many tasks without
// synchronization.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    message: Arc<Message>,
    file_data: FileDataCache,
    lookups: InternalDataCache,
    external: ExternalDataCache,
}

impl ValidationContext {
    pub fn message(&self) -> &Arc<Message> {
        &self.message
    }

    pub fn file_data(&self) -> &FileDataCache {
        &self.file_data
    }

    pub fn lookups(&self) -> &InternalDataCache {
        &self.lookups
    }

    pub fn external(&self) -> &ExternalDataCache {
        &self.external
    }
}

// ==========================================
// PopulationOrchestrator
// ==========================================
pub struct PopulationOrchestrator<Q, L>
where
    Q: QualificationSource,
    L: LearnerNumberSource,
{
    extractor: CrossReferenceExtractor<Q, L>,
    lookup_resource: String,
    academic_year: AcademicYear,
    state: PopulationState,
}

impl<Q, L> PopulationOrchestrator<Q, L>
where
    Q: QualificationSource,
    L: LearnerNumberSource,
{
    /// # Arguments
    /// - lookup_resource: raw bundled lookup resource (see
    ///   `lookup::EMBEDDED_LOOKUPS`)
    /// - academic_year: collection-year boundaries for this run
    /// - qualification_source / learner_number_source: external
    ///   reference services; supplying them here is the wiring-time
    ///   dependency check
    pub fn new(
        lookup_resource: impl Into<String>,
        academic_year: AcademicYear,
        qualification_source: Arc<Q>,
        learner_number_source: Arc<L>,
    ) -> Self {
        Self {
            extractor: CrossReferenceExtractor::new(qualification_source, learner_number_source),
            lookup_resource: lookup_resource.into(),
            academic_year,
            state: PopulationState::NotStarted,
        }
    }

    pub fn state(&self) -> PopulationState {
        self.state
    }

    /// Populate all caches for one run.
    ///
    /// The message is stored first; the file projection, lookup build
    /// and cross-reference extraction then run concurrently. Returns
    /// when all three finished, or propagates the first failure.
    pub async fn populate(&mut self, message: Message) -> Result<ValidationContext, PopulationError> {
        self.run(message, None).await
    }

    /// Like `populate`, but stops waiting and reports `Cancelled`
    /// when the shutdown signal fires.
    pub async fn populate_with_shutdown(
        &mut self,
        message: Message,
        shutdown: watch::Receiver<bool>,
    ) -> Result<ValidationContext, PopulationError> {
        self.run(message, Some(shutdown)).await
    }

    async fn run(
        &mut self,
        message: Message,
        shutdown: Option<watch::Receiver<bool>>,
    ) -> Result<ValidationContext, PopulationError> {
        // One run per orchestrator; retries belong to the caller.
        // The guard also keeps the message cache's single-assignment
        // contract observable at this level.
        if self.state != PopulationState::NotStarted {
            warn!(state = ?self.state, "population requested more than once; refusing re-run");
            return Err(PopulationError::AlreadyRan);
        }
        self.state = PopulationState::Populating;
        info!(learners = message.learners.len(), "cache population started");

        let result = match shutdown {
            None => self.populate_caches(message).await,
            Some(mut shutdown) => {
                // Only an observed `true` is a shutdown. A re-sent
                // `false` keeps waiting, and a closed channel means no
                // shutdown controller exists, so population proceeds.
                if *shutdown.borrow() {
                    Err(PopulationError::Cancelled)
                } else {
                    let signalled = async move {
                        if shutdown.wait_for(|signalled| *signalled).await.is_err() {
                            pending::<()>().await;
                        }
                    };
                    tokio::select! {
                        result = self.populate_caches(message) => result,
                        _ = signalled => Err(PopulationError::Cancelled),
                    }
                }
            }
        };

        match result {
            Ok(context) => {
                self.state = PopulationState::Complete;
                info!(
                    qualifications = context.external().learning_deliveries().len(),
                    frameworks = context.external().frameworks().len(),
                    learner_numbers = context.external().learner_numbers().len(),
                    "cache population complete"
                );
                Ok(context)
            }
            Err(err) => {
                self.state = PopulationState::Failed;
                error!(step = err.failed_step(), error = %err, "cache population failed");
                Err(err)
            }
        }
    }

    async fn populate_caches(&self, message: Message) -> Result<ValidationContext, PopulationError> {
        // Message strictly first: two of the three concurrent steps
        // read the batch through the holder.
        let mut message_cache = MessageCache::new();
        message_cache.set(Arc::new(message))?;
        let message = Arc::clone(message_cache.get()?);

        let file_step = async {
            Ok::<FileDataCache, PopulationError>(FileDataCache::populate(Some(&message)))
        };
        let lookup_step = async {
            LookupBuilder::new(self.academic_year)
                .build(&self.lookup_resource)
                .map_err(PopulationError::from)
        };
        let external_step = async {
            self.extractor
                .extract(&message)
                .await
                .map_err(PopulationError::from)
        };

        // The three steps write disjoint caches; no ordering between
        // them, first failure aborts the join.
        let (file_data, lookups, external) =
            try_join3(file_step, lookup_step, external_step).await?;

        Ok(ValidationContext {
            message,
            file_data,
            lookups,
            external,
        })
    }
}
