//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la tabla estática
//! de perfiles de mantenimiento preventivo.

pub mod environment;
pub mod profiles;

pub use environment::*;
