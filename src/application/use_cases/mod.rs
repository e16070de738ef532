/// Use cases module containing application business logic orchestration
mod round_trip;

pub use round_trip::RoundTripUseCase;
