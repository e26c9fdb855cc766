pub mod nutmeg;
pub mod projections_provider;
