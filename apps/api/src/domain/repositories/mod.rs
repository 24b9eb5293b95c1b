// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod hospital_repository;

pub use hospital_repository::HospitalRepository;
