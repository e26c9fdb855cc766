mod projection;

pub use projection::{
    AccountType, InvestmentStyle, ProjectionBand, ProjectionParams, ProjectionSummary, RiskLevel,
};
