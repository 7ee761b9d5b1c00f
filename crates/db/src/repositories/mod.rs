//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod alert_repo;
pub mod case_repo;
pub mod communication_repo;
pub mod dashboard_repo;
pub mod duty_repo;
pub mod personnel_repo;
pub mod user_repo;

pub use alert_repo::AlertRepo;
pub use case_repo::CaseRepo;
pub use communication_repo::CommunicationRepo;
pub use dashboard_repo::DashboardRepo;
pub use duty_repo::DutyRepo;
pub use personnel_repo::PersonnelRepo;
pub use user_repo::UserRepo;
