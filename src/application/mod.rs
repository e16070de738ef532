/// Application layer - Use cases and DTOs
///
/// This layer runs scenarios against the outbound ports and reports
/// what was printed and removed.
pub mod dto;
pub mod use_cases;
