/// Data Transfer Objects for application layer
///
/// DTOs carry what the CLI asks for into the use case and what happened
/// back out, keeping the domain layer isolated.
mod round_trip_request;
mod round_trip_response;

pub use round_trip_request::RoundTripRequest;
pub use round_trip_response::{PrintedFile, RoundTripResponse};
