// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_hospital_repository;

pub use postgres_hospital_repository::PostgresHospitalRepository;
