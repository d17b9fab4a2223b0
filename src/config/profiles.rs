//! Perfiles de mantenimiento preventivo
//!
//! Tabla estática categoría → calendario de hitos. Los hitos de cada
//! perfil están en orden estrictamente ascendente de kilometraje y ningún
//! perfil está vacío.

use crate::models::vehicle::VehicleCategory;

/// Hito del calendario preventivo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub km_mark: u64,
    pub items: &'static [&'static str],
}

static CAR_PROFILE: [Milestone; 4] = [
    Milestone {
        km_mark: 5000,
        items: &["Troca de óleo e filtro", "Verificação de fluídos"],
    },
    Milestone {
        km_mark: 10000,
        items: &["Alinhamento e balanceamento", "Inspeção de freios"],
    },
    Milestone {
        km_mark: 20000,
        items: &[
            "Troca de filtros de ar e cabine",
            "Revisão do sistema de arrefecimento",
        ],
    },
    Milestone {
        km_mark: 40000,
        items: &["Inspeção da correia dentada", "Troca de velas"],
    },
];

static MOTORCYCLE_PROFILE: [Milestone; 3] = [
    Milestone {
        km_mark: 3000,
        items: &["Troca de óleo", "Ajuste de corrente"],
    },
    Milestone {
        km_mark: 6000,
        items: &["Verificação de freios", "Lubrificação de cabos"],
    },
    Milestone {
        km_mark: 12000,
        items: &["Revisão de suspensão", "Troca de filtro de ar"],
    },
];

static TRUCK_PROFILE: [Milestone; 3] = [
    Milestone {
        km_mark: 10000,
        items: &[
            "Troca de óleo de motor e filtros",
            "Verificação de sistema pneumático",
        ],
    },
    Milestone {
        km_mark: 20000,
        items: &["Inspeção de suspensão e direção", "Revisão de freios"],
    },
    Milestone {
        km_mark: 40000,
        items: &["Troca de fluído de transmissão", "Verificação de diferencial"],
    },
];

static OTHER_PROFILE: [Milestone; 2] = [
    Milestone {
        km_mark: 5000,
        items: &["Checagem geral de fluídos", "Aperto de componentes"],
    },
    Milestone {
        km_mark: 15000,
        items: &["Revisão estrutural", "Verificação elétrica"],
    },
];

/// Obtener el calendario preventivo de una categoría
pub fn get_profile(category: VehicleCategory) -> &'static [Milestone] {
    match category {
        VehicleCategory::Car => &CAR_PROFILE,
        VehicleCategory::Motorcycle => &MOTORCYCLE_PROFILE,
        VehicleCategory::Truck => &TRUCK_PROFILE,
        VehicleCategory::Other => &OTHER_PROFILE,
    }
}

/// Igual que [`get_profile`] pero a partir del nombre de la categoría.
/// Una categoría desconocida usa el perfil genérico `other`.
pub fn get_profile_by_name(category: &str) -> &'static [Milestone] {
    get_profile(VehicleCategory::from_name(category))
}
