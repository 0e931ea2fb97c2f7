use super::SelectChoice;
use serde::{Deserialize, Serialize};

/// Spending bracket picked by a vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    Under100,
    From100To500,
    From500To1000,
    Over1000,
    From1000To2500,
    From2500To5000,
    Over5000,
}

impl BudgetRange {
    /// Brackets offered by the supplier directory filter
    pub const DIRECTORY: [BudgetRange; 4] = [
        BudgetRange::Under100,
        BudgetRange::From100To500,
        BudgetRange::From500To1000,
        BudgetRange::Over1000,
    ];

    /// Brackets offered by the registration and inquiry forms
    pub const FORMS: [BudgetRange; 6] = [
        BudgetRange::Under100,
        BudgetRange::From100To500,
        BudgetRange::From500To1000,
        BudgetRange::From1000To2500,
        BudgetRange::From2500To5000,
        BudgetRange::Over5000,
    ];

    /// Upper bound in whole dollars, `None` for open-ended brackets
    pub fn upper_bound(&self) -> Option<u32> {
        match self {
            BudgetRange::Under100 => Some(100),
            BudgetRange::From100To500 => Some(500),
            BudgetRange::From500To1000 => Some(1_000),
            BudgetRange::From1000To2500 => Some(2_500),
            BudgetRange::From2500To5000 => Some(5_000),
            BudgetRange::Over1000 | BudgetRange::Over5000 => None,
        }
    }

    pub fn to_options(ranges: &[BudgetRange]) -> Vec<(String, String)> {
        ranges
            .iter()
            .map(|r| (r.code().to_string(), r.display_name().to_string()))
            .collect()
    }
}

impl SelectChoice for BudgetRange {
    fn code(&self) -> &'static str {
        match self {
            BudgetRange::Under100 => "under-100",
            BudgetRange::From100To500 => "100-500",
            BudgetRange::From500To1000 => "500-1000",
            BudgetRange::Over1000 => "over-1000",
            BudgetRange::From1000To2500 => "1000-2500",
            BudgetRange::From2500To5000 => "2500-5000",
            BudgetRange::Over5000 => "over-5000",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            BudgetRange::Under100 => "Under $100",
            BudgetRange::From100To500 => "$100 - $500",
            BudgetRange::From500To1000 => "$500 - $1,000",
            BudgetRange::Over1000 => "Over $1,000",
            BudgetRange::From1000To2500 => "$1,000 - $2,500",
            BudgetRange::From2500To5000 => "$2,500 - $5,000",
            BudgetRange::Over5000 => "Over $5,000",
        }
    }

    fn all() -> &'static [Self] {
        &[
            BudgetRange::Under100,
            BudgetRange::From100To500,
            BudgetRange::From500To1000,
            BudgetRange::Over1000,
            BudgetRange::From1000To2500,
            BudgetRange::From2500To5000,
            BudgetRange::Over5000,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ended_ranges_have_no_bound() {
        assert_eq!(BudgetRange::Over1000.upper_bound(), None);
        assert_eq!(BudgetRange::Over5000.upper_bound(), None);
        assert_eq!(BudgetRange::Under100.upper_bound(), Some(100));
    }

    #[test]
    fn test_directory_and_form_lists() {
        let directory: Vec<_> = BudgetRange::DIRECTORY.iter().map(|r| r.code()).collect();
        assert_eq!(directory, ["under-100", "100-500", "500-1000", "over-1000"]);

        let forms = BudgetRange::to_options(&BudgetRange::FORMS);
        assert_eq!(forms.len(), 6);
        assert_eq!(forms[5], ("over-5000".to_string(), "Over $5,000".to_string()));
    }

    #[test]
    fn test_from_code() {
        assert_eq!(BudgetRange::from_code("500-1000"), Some(BudgetRange::From500To1000));
        assert_eq!(BudgetRange::from_code("any"), None);
    }
}
