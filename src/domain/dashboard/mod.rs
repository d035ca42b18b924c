pub mod snapshot;

pub use snapshot::{
    DashboardSnapshot, DashboardView, KeyBudgetFacts, SectorCard, ECONOMIC_SECTORS,
    POPULATION_UNITS, SOCIAL_SECTORS,
};
