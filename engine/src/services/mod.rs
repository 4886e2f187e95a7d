// Service layer: the batch harness feeding export records through the
// currency parser.

pub mod parse_service;
