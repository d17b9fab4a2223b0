//! Extractores propios
//!
//! `AppJson` envuelve `axum::Json` para que un cuerpo inválido responda con
//! el mismo formato JSON de error que el resto de la API.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::utils::errors::AppError;

/// Cuerpo JSON cuyo rechazo se convierte en [`AppError::InvalidJson`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}
