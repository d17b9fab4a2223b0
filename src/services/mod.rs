//! Services module
//!
//! Este módulo contiene la lógica de negocio: el motor de sugerencias de
//! mantenimiento y los colaboradores que consumen su resultado
//! (dashboard y certificado).

pub mod certificate_service;
pub mod dashboard_service;
pub mod suggestion_service;

pub use certificate_service::*;
pub use dashboard_service::*;
pub use suggestion_service::*;
