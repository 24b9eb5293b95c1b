// Application services
// Use-case entry points that sit between the API adapter and repositories

pub mod hospital_service;

pub use hospital_service::HospitalService;
