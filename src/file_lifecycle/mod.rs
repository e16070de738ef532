/// Domain layer for the file lifecycle: what is written, read and removed, and in which order.
pub mod domain;
