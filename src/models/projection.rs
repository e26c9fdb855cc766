use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MINIMUM_STARTING_AMOUNT: i64 = 500;
pub const MINIMUM_TIMEFRAME_YEARS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentStyle {
    Fixed,
    Sri,
    Managed,
    SmartAlpha,
}

impl InvestmentStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentStyle::Fixed => "FIXED",
            InvestmentStyle::Sri => "SRI",
            InvestmentStyle::Managed => "MANAGED",
            InvestmentStyle::SmartAlpha => "SMART_ALPHA",
        }
    }
}

impl FromStr for InvestmentStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIXED" => Ok(InvestmentStyle::Fixed),
            "SRI" => Ok(InvestmentStyle::Sri),
            "MANAGED" => Ok(InvestmentStyle::Managed),
            "SMART_ALPHA" => Ok(InvestmentStyle::SmartAlpha),
            other => Err(format!(
                "Invalid investment style {}, expected one of FIXED, SRI, MANAGED, SMART_ALPHA",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Ma,
    Mb,
    Mc,
    Md,
    Me,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Ma => "MA",
            RiskLevel::Mb => "MB",
            RiskLevel::Mc => "MC",
            RiskLevel::Md => "MD",
            RiskLevel::Me => "ME",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MA" => Ok(RiskLevel::Ma),
            "MB" => Ok(RiskLevel::Mb),
            "MC" => Ok(RiskLevel::Mc),
            "MD" => Ok(RiskLevel::Md),
            "ME" => Ok(RiskLevel::Me),
            other => Err(format!(
                "Invalid risk level {}, expected one of MA, MB, MC, MD, ME",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Isa,
    Ga,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Isa => "ISA",
            AccountType::Ga => "GA",
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ISA" => Ok(AccountType::Isa),
            "GA" => Ok(AccountType::Ga),
            other => Err(format!(
                "Invalid account type {}, expected one of ISA, GA",
                other
            )),
        }
    }
}

/// Client-supplied projection inputs, validated at construction.
#[derive(Debug, Clone)]
pub struct ProjectionParams {
    pub starting_amount: i64,
    pub monthly_contributions: i64,
    pub timeframe: i64,
    pub investment_style: InvestmentStyle,
    pub risk_level: RiskLevel,
    pub account_type: AccountType,
}

impl ProjectionParams {
    pub fn new(
        starting_amount: i64,
        monthly_contributions: i64,
        timeframe: i64,
        investment_style: &str,
        risk_level: &str,
        account_type: &str,
    ) -> Result<Self, String> {
        if starting_amount < MINIMUM_STARTING_AMOUNT {
            return Err(format!(
                "Provided starting amount {} less than minimum {}",
                starting_amount, MINIMUM_STARTING_AMOUNT
            ));
        }
        if monthly_contributions < 0 {
            return Err(format!(
                "Provided monthly contribution {} less than minimum 0",
                monthly_contributions
            ));
        }
        if timeframe < MINIMUM_TIMEFRAME_YEARS {
            return Err(format!(
                "Provided timeframe {} less than minimum {}",
                timeframe, MINIMUM_TIMEFRAME_YEARS
            ));
        }

        Ok(Self {
            starting_amount,
            monthly_contributions,
            timeframe,
            investment_style: investment_style.parse()?,
            risk_level: risk_level.parse()?,
            account_type: account_type.parse()?,
        })
    }
}

/// Median/low/high projection values at a single time point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionBand {
    #[serde(rename = "Projection")]
    pub projection: f64,
    #[serde(rename = "lowProjection")]
    pub low_projection: f64,
    #[serde(rename = "highProjection")]
    pub high_projection: f64,
}

/// Two-time-point summary returned to the client. Field names follow the
/// established wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    #[serde(rename = "Year one end")]
    pub year_one_end: ProjectionBand,
    #[serde(rename = "Timeframe-end")]
    pub timeframe_end: ProjectionBand,
}
