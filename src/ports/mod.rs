/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what the CLI drives (the file lifecycle operations);
/// outbound ports are what the application core drives (filesystem, stdout, stderr).
pub mod inbound;
pub mod outbound;
