// ==========================================
// Learner Record Validation - Domain Layer
// ==========================================
// Responsibility: batch model and shared value types
// Red line: the domain layer performs no I/O and holds no
//           mutable state
// ==========================================

pub mod message;
pub mod types;

pub use message::{
    DeliveryMonitoring, DestinationAndProgression, EmploymentMonitoring, EmploymentStatus,
    Learner, LearnerMonitoring, LearningDelivery, Message, MessageHeader, Outcome,
};
pub use types::{
    AcademicYear, CodedLookup, CodedNestedLookup, FrameworkKey, LookupKeyType, SimpleLookup,
    TimeRestrictedLookup, ValidityPeriod,
};
