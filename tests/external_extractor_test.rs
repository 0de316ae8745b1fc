// ==========================================
// Cross-reference extractor tests
// ==========================================
// Scope: subsetting invariant, framework key-set query semantics
//        (N=0/1/3), framework-aim filtering, learner-number subset
// ==========================================

#[path = "helpers/test_data_builder.rs"]
mod test_data_builder;

use learner_validation::domain::FrameworkKey;
use learner_validation::external::{
    CrossReferenceExtractor, InMemoryLearnerNumberSource, InMemoryQualificationSource,
    QualificationSource,
};
use std::collections::HashSet;
use std::sync::Arc;
use test_data_builder::*;

fn extractor(
    qualifications: InMemoryQualificationSource,
    registry: HashSet<i64>,
) -> CrossReferenceExtractor<InMemoryQualificationSource, InMemoryLearnerNumberSource> {
    CrossReferenceExtractor::new(
        Arc::new(qualifications),
        Arc::new(InMemoryLearnerNumberSource::new(registry)),
    )
}

// ==========================================
// Subsetting invariant
// ==========================================

#[tokio::test]
async fn qualifications_are_subset_to_the_demand_set() {
    let source = InMemoryQualificationSource::new(
        vec![
            qualification("X0001"),
            qualification("X0002"),
            qualification("X0003"),
        ],
        vec![],
    );
    let message = message_with_learners(vec![LearnerBuilder::new("L1")
        .delivery(delivery_with_aim(1, "X0001"))
        .build()]);

    let cache = extractor(source, HashSet::new())
        .extract(&message)
        .await
        .unwrap();

    assert_eq!(cache.learning_deliveries().len(), 1);
    assert!(cache.learning_delivery("X0001").is_some());
    // Rows the batch never references must not appear, even though
    // the external source has them.
    assert!(cache.learning_delivery("X0002").is_none());
    assert!(cache.learning_delivery("X0003").is_none());
}

// ==========================================
// Framework key-set query semantics
// ==========================================

#[tokio::test]
async fn empty_framework_key_set_matches_nothing() {
    let source = InMemoryQualificationSource::new(
        vec![],
        vec![framework(10, 2, 1, vec![])],
    );
    // No delivery carries a complete framework tuple.
    let message = message_with_learners(vec![LearnerBuilder::new("L1")
        .delivery(delivery_with_aim(1, "X0001"))
        .build()]);

    let cache = extractor(source, HashSet::new())
        .extract(&message)
        .await
        .unwrap();

    assert!(cache.frameworks().is_empty());
}

#[tokio::test]
async fn single_framework_key_matches_exactly_one_tuple() {
    let source = InMemoryQualificationSource::new(
        vec![],
        vec![framework(10, 2, 1, vec![]), framework(11, 2, 1, vec![])],
    );
    let message = message_with_learners(vec![LearnerBuilder::new("L1")
        .delivery(delivery_with_framework(1, "X0001", 10, 2, 1))
        .build()]);

    let cache = extractor(source, HashSet::new())
        .extract(&message)
        .await
        .unwrap();

    assert_eq!(cache.frameworks().len(), 1);
    assert_eq!(
        cache.frameworks()[0].key(),
        FrameworkKey {
            framework_code: 10,
            programme_type: 2,
            pathway_code: 1
        }
    );
}

#[tokio::test]
async fn key_set_query_returns_the_union_of_matching_tuples() {
    let source = InMemoryQualificationSource::new(
        vec![],
        vec![
            framework(10, 2, 1, vec![]),
            framework(10, 2, 2, vec![]), // overlaps on framework/programme, different pathway
            framework(20, 3, 1, vec![]),
            framework(99, 9, 9, vec![]), // never referenced
        ],
    );
    let message = message_with_learners(vec![
        LearnerBuilder::new("L1")
            .delivery(delivery_with_framework(1, "A1", 10, 2, 1))
            .delivery(delivery_with_framework(2, "A2", 10, 2, 2))
            .build(),
        LearnerBuilder::new("L2")
            .delivery(delivery_with_framework(1, "A3", 20, 3, 1))
            // Duplicate key from another learner must not duplicate rows.
            .delivery(delivery_with_framework(2, "A4", 10, 2, 1))
            .build(),
    ]);

    let cache = extractor(source, HashSet::new())
        .extract(&message)
        .await
        .unwrap();

    let keys: HashSet<FrameworkKey> = cache.frameworks().iter().map(|f| f.key()).collect();
    assert_eq!(cache.frameworks().len(), 3);
    assert_eq!(
        keys,
        HashSet::from([
            FrameworkKey { framework_code: 10, programme_type: 2, pathway_code: 1 },
            FrameworkKey { framework_code: 10, programme_type: 2, pathway_code: 2 },
            FrameworkKey { framework_code: 20, programme_type: 3, pathway_code: 1 },
        ])
    );
}

#[tokio::test]
async fn framework_aims_are_filtered_to_the_aim_demand_set() {
    let source = InMemoryQualificationSource::new(
        vec![qualification("X0001")],
        vec![framework(
            10,
            2,
            1,
            vec![
                framework_aim("X0001", 10, 2, 1),
                framework_aim("X9999", 10, 2, 1), // not referenced by the batch
            ],
        )],
    );
    let message = message_with_learners(vec![LearnerBuilder::new("L1")
        .delivery(delivery_with_framework(1, "X0001", 10, 2, 1))
        .build()]);

    let cache = extractor(source, HashSet::new())
        .extract(&message)
        .await
        .unwrap();

    assert_eq!(cache.frameworks().len(), 1);
    let aims = &cache.frameworks()[0].framework_aims;
    assert_eq!(aims.len(), 1);
    assert_eq!(aims[0].aim_ref, "X0001");
}

// ==========================================
// Learner-number registry subset
// ==========================================

#[tokio::test]
async fn learner_numbers_are_intersected_with_the_registry() {
    let source = InMemoryQualificationSource::default();
    let message = message_with_learners(vec![
        LearnerBuilder::new("L1").learner_number(123456789).build(),
        LearnerBuilder::new("L2").learner_number(555555555).build(),
    ]);

    let cache = extractor(source, HashSet::from([123456789, 999999999]))
        .extract(&message)
        .await
        .unwrap();

    assert!(cache.contains_learner_number(123456789));
    assert!(!cache.contains_learner_number(555555555)); // referenced but unknown
    assert!(!cache.contains_learner_number(999999999)); // known but unreferenced
}

// ==========================================
// In-memory source contract
// ==========================================

#[tokio::test]
async fn empty_aim_set_queries_return_nothing() {
    let source = InMemoryQualificationSource::new(vec![qualification("X0001")], vec![]);
    let rows = source
        .qualifications_for_aims(&HashSet::new())
        .await
        .unwrap();
    assert!(rows.is_empty());
}
