//! DTOs de la API
//!
//! Cuerpos de request y response de los endpoints HTTP. La capa de
//! persistencia queda fuera del servicio: quien llama envía el vehículo y
//! su historial tal como los cargó.

pub mod certificate_dto;
pub mod dashboard_dto;
pub mod suggestion_dto;
