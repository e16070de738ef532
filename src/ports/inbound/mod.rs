/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the operations that external adapters (e.g., CLI)
/// invoke on the application core.
pub mod file_lifecycle_port;

pub use file_lifecycle_port::FileLifecyclePort;
