use super::SelectChoice;
use serde::{Deserialize, Serialize};

/// Years a supplier has been trading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceRange {
    OneToTwo,
    ThreeToFive,
    SixToTen,
    OverTen,
}

impl SelectChoice for ExperienceRange {
    fn code(&self) -> &'static str {
        match self {
            ExperienceRange::OneToTwo => "1-2",
            ExperienceRange::ThreeToFive => "3-5",
            ExperienceRange::SixToTen => "6-10",
            ExperienceRange::OverTen => "10+",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ExperienceRange::OneToTwo => "1-2 years",
            ExperienceRange::ThreeToFive => "3-5 years",
            ExperienceRange::SixToTen => "6-10 years",
            ExperienceRange::OverTen => "10+ years",
        }
    }

    fn all() -> &'static [Self] {
        &[
            ExperienceRange::OneToTwo,
            ExperienceRange::ThreeToFive,
            ExperienceRange::SixToTen,
            ExperienceRange::OverTen,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentTerms {
    CashOnDelivery,
    Net15,
    Net30,
    AdvancePayment,
    Flexible,
}

impl SelectChoice for PaymentTerms {
    fn code(&self) -> &'static str {
        match self {
            PaymentTerms::CashOnDelivery => "cash-on-delivery",
            PaymentTerms::Net15 => "net-15",
            PaymentTerms::Net30 => "net-30",
            PaymentTerms::AdvancePayment => "advance-payment",
            PaymentTerms::Flexible => "flexible",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            PaymentTerms::CashOnDelivery => "Cash on Delivery",
            PaymentTerms::Net15 => "Net 15 days",
            PaymentTerms::Net30 => "Net 30 days",
            PaymentTerms::AdvancePayment => "Advance Payment",
            PaymentTerms::Flexible => "Flexible",
        }
    }

    fn all() -> &'static [Self] {
        &[
            PaymentTerms::CashOnDelivery,
            PaymentTerms::Net15,
            PaymentTerms::Net30,
            PaymentTerms::AdvancePayment,
            PaymentTerms::Flexible,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_keep_declaration_order() {
        let codes: Vec<String> = ExperienceRange::options().into_iter().map(|(c, _)| c).collect();
        assert_eq!(codes, ["1-2", "3-5", "6-10", "10+"]);
    }

    #[test]
    fn test_payment_terms_lookup() {
        assert_eq!(PaymentTerms::from_code("net-30"), Some(PaymentTerms::Net30));
        assert_eq!(PaymentTerms::Net30.display_name(), "Net 30 days");
    }
}
