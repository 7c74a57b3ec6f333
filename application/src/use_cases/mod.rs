//! Use cases (application services)

pub mod governance_advisor;
