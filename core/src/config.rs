use crate::{
    error::{CreditError, CreditResult},
    sampling::{CumulativeWeights, WeightEntry},
    types::{LoanStatus, RiskBand},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "KES";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub borrower_count: usize,
    pub loan_count: usize,
    /// Loans reference `BORR001..=BORR{range}` regardless of how many
    /// borrowers were actually generated.
    pub borrower_reference_range: u32,
    pub registration_backdate_days: u32,
    pub origination_backdate_days: u32,
    pub status_weights: Vec<WeightEntry<LoanStatus>>,
    pub risk_band_weights: Vec<WeightEntry<RiskBand>>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.into()
}

#[derive(Debug, Clone, Deserialize)]
struct GeneratorConfigFile {
    generator: GeneratorConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            borrower_count: 100,
            loan_count: 200,
            borrower_reference_range: 100,
            registration_backdate_days: 1000,
            origination_backdate_days: 365 * 3,
            status_weights: vec![
                WeightEntry::new(LoanStatus::Active, 0.75),
                WeightEntry::new(LoanStatus::Delinquent, 0.10),
                WeightEntry::new(LoanStatus::Restructured, 0.05),
                WeightEntry::new(LoanStatus::Closed, 0.08),
                WeightEntry::new(LoanStatus::WrittenOff, 0.02),
            ],
            risk_band_weights: vec![
                WeightEntry::new(RiskBand::Low, 0.60),
                WeightEntry::new(RiskBand::Medium, 0.25),
                WeightEntry::new(RiskBand::High, 0.10),
                WeightEntry::new(RiskBand::Critical, 0.05),
            ],
            currency: default_currency(),
        }
    }
}

impl GeneratorConfig {
    /// Load from the data/ directory.
    /// In tests, use GeneratorConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/generator/generator_config.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: GeneratorConfigFile = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        file.generator
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config in {path}: {e}"))?;
        log::debug!("loaded generator config from {path}");
        Ok(file.generator)
    }

    /// Config with small counts for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            borrower_count: 10,
            loan_count: 20,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> CreditResult<()> {
        if self.borrower_count == 0 {
            return Err(CreditError::invalid("borrower_count", "must be >= 1"));
        }
        if self.loan_count == 0 {
            return Err(CreditError::invalid("loan_count", "must be >= 1"));
        }
        if self.borrower_reference_range == 0 {
            return Err(CreditError::invalid("borrower_reference_range", "must be >= 1"));
        }
        if self.registration_backdate_days < 2 {
            return Err(CreditError::invalid("registration_backdate_days", "must be >= 2"));
        }
        if self.origination_backdate_days < 2 {
            return Err(CreditError::invalid("origination_backdate_days", "must be >= 2"));
        }
        self.status_table()?;
        self.risk_band_table()?;
        Ok(())
    }

    pub fn status_table(&self) -> CreditResult<CumulativeWeights<LoanStatus>> {
        CumulativeWeights::from_entries("status_weights", &self.status_weights)
    }

    pub fn risk_band_table(&self) -> CreditResult<CumulativeWeights<RiskBand>> {
        CumulativeWeights::from_entries("risk_band_weights", &self.risk_band_weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        GeneratorConfig::default().validate().unwrap();
        let test = GeneratorConfig::default_test();
        test.validate().unwrap();
        assert_eq!(test.borrower_count, 10);
        assert_eq!(test.origination_backdate_days, 1095);
    }

    #[test]
    fn zero_counts_rejected() {
        let config = GeneratorConfig {
            loan_count: 0,
            ..GeneratorConfig::default_test()
        };
        assert!(matches!(
            config.validate(),
            Err(CreditError::InvalidArgument { argument: "loan_count", .. })
        ));
    }

    #[test]
    fn parses_config_file_shape() {
        let json = r#"{
            "generator": {
                "borrower_count": 5,
                "loan_count": 7,
                "borrower_reference_range": 100,
                "registration_backdate_days": 1000,
                "origination_backdate_days": 1095,
                "status_weights": [
                    { "value": "Active", "weight": 0.9 },
                    { "value": "Written Off", "weight": 0.1 }
                ],
                "risk_band_weights": [
                    { "value": "Low", "weight": 1.0 }
                ]
            }
        }"#;
        let file: GeneratorConfigFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.generator.loan_count, 7);
        assert_eq!(file.generator.currency, "KES");
        assert_eq!(file.generator.status_weights[1].value, LoanStatus::WrittenOff);
        file.generator.validate().unwrap();
    }
}
