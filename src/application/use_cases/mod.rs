/// Use cases module containing application business logic orchestration
mod chill_packages;

pub use chill_packages::ChillUseCase;
