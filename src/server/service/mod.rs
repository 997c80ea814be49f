//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Uniqueness checks, match result derivation and clan switching
//! - **Orchestration**: Combining repository calls into the aggregates the API returns
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Mapping**: Turning missing rows into `404` and rejected input into `400`

pub mod clan;
pub mod contest;
pub mod dashboard;
pub mod game_match;
pub mod grade;
pub mod notice;
pub mod player;

#[cfg(test)]
mod test;
