//! SeaORM adapters. Functions are generic over `ConnectionTrait` and return
//! `DbErr`; the repos layer maps errors into `DomainError`.

pub mod games_sea;
pub mod guesses_sea;
pub mod words_sea;
