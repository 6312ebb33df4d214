//! Payroll record model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AssistantError, AssistantResult};

/// One employee's payroll for one month.
///
/// Monetary amounts accept either JSON numbers or numeric strings, since
/// callers commonly send pre-formatted values such as `"1800.00"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    /// Identifier of the employee this record belongs to.
    pub emp_id: String,
    /// Month label (e.g., "January 2026").
    pub month: String,
    /// Monthly cost to company.
    #[serde(rename = "monthlyCTC")]
    pub monthly_ctc: Decimal,
    /// Sum of all deductions for the month.
    pub total_deductions: Decimal,
    /// Take-home pay for the month.
    pub net_pay: Decimal,
    /// Base pay after unpaid-leave deductions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_pay: Option<Decimal>,
    /// Overtime pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_pay: Option<Decimal>,
    /// Gross pay (base plus overtime).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_pay: Option<Decimal>,
    /// Employee provident fund contribution.
    #[serde(
        rename = "employeePF",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub employee_pf: Option<Decimal>,
    /// Professional tax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_tax: Option<Decimal>,
    /// Annual cost to company.
    #[serde(rename = "annualCTC", default, skip_serializing_if = "Option::is_none")]
    pub annual_ctc: Option<Decimal>,
    /// Annual take-home pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_take_home: Option<Decimal>,
    /// Any additional fields supplied by the caller.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PayrollRecord {
    /// Checks the record's invariants.
    pub fn validate(&self, index: usize) -> AssistantResult<()> {
        if self.emp_id.trim().is_empty() {
            return Err(AssistantError::InvalidRecord {
                collection: "payroll",
                index,
                field: "empId",
                message: "must not be empty".to_string(),
            });
        }
        // totalDeductions may carry either sign
        let amounts = [
            ("monthlyCTC", Some(self.monthly_ctc)),
            ("netPay", Some(self.net_pay)),
            ("basePay", self.base_pay),
            ("overtimePay", self.overtime_pay),
            ("grossPay", self.gross_pay),
            ("employeePF", self.employee_pf),
            ("professionalTax", self.professional_tax),
            ("annualCTC", self.annual_ctc),
            ("annualTakeHome", self.annual_take_home),
        ];
        for (field, amount) in amounts {
            if let Some(amount) = amount.filter(|a| *a < Decimal::ZERO) {
                return Err(AssistantError::InvalidRecord {
                    collection: "payroll",
                    index,
                    field,
                    message: format!("must not be negative, got {}", amount),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_frontend_record() {
        let json = r#"{
            "empId": "EMP001",
            "empName": "Raj Kumar",
            "month": "January 2026",
            "monthlyCTC": 95000,
            "basePay": "95000.00",
            "overtimePay": "0.00",
            "grossPay": "95000.00",
            "employeePF": "1800.00",
            "professionalTax": "200.00",
            "totalDeductions": "2000.00",
            "netPay": "93000.00",
            "annualCTC": 1140000,
            "annualTakeHome": "1116000.00"
        }"#;

        let record: PayrollRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.monthly_ctc, dec("95000"));
        assert_eq!(record.total_deductions, dec("2000.00"));
        assert_eq!(record.net_pay, dec("93000.00"));
        assert_eq!(record.employee_pf, Some(dec("1800.00")));
        assert_eq!(record.annual_ctc, Some(dec("1140000")));
        assert_eq!(record.extra["empName"], "Raj Kumar");
        assert!(!record.extra.contains_key("monthlyCTC"));
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let json = r#"{
            "empId": "EMP001",
            "month": "January 2026",
            "monthlyCTC": 95000,
            "totalDeductions": 2000,
            "netPay": 93000,
            "employeePF": 1800
        }"#;

        let record: PayrollRecord = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("monthlyCTC").is_some());
        assert!(value.get("employeePF").is_some());
        assert!(value.get("grossPay").is_none());
    }

    #[test]
    fn test_missing_net_pay_is_rejected() {
        let json = r#"{
            "empId": "EMP001",
            "month": "January 2026",
            "monthlyCTC": 95000,
            "totalDeductions": 2000
        }"#;

        assert!(serde_json::from_str::<PayrollRecord>(json).is_err());
    }

    #[test]
    fn test_validate_rejects_negative_ctc() {
        let json = r#"{
            "empId": "EMP001",
            "month": "January 2026",
            "monthlyCTC": -5,
            "totalDeductions": 0,
            "netPay": 0
        }"#;

        let record: PayrollRecord = serde_json::from_str(json).unwrap();
        assert!(matches!(
            record.validate(0),
            Err(AssistantError::InvalidRecord {
                field: "monthlyCTC",
                ..
            })
        ));
    }

    fn record_with(field: &str, value: serde_json::Value) -> PayrollRecord {
        let mut json = serde_json::json!({
            "empId": "EMP001",
            "month": "January 2026",
            "monthlyCTC": 95000,
            "totalDeductions": 2000,
            "netPay": 93000
        });
        json[field] = value;
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_validate_rejects_each_negative_amount() {
        for field in [
            "netPay",
            "basePay",
            "overtimePay",
            "grossPay",
            "employeePF",
            "professionalTax",
            "annualCTC",
            "annualTakeHome",
        ] {
            let record = record_with(field, serde_json::json!("-1.00"));
            match record.validate(3) {
                Err(AssistantError::InvalidRecord {
                    collection,
                    index,
                    field: rejected,
                    ..
                }) => {
                    assert_eq!(collection, "payroll");
                    assert_eq!(index, 3);
                    assert_eq!(rejected, field);
                }
                other => panic!("Expected InvalidRecord for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_validate_allows_negative_deductions_and_zero_amounts() {
        let record = record_with("totalDeductions", serde_json::json!("-150.00"));
        assert!(record.validate(0).is_ok());

        let record = record_with("overtimePay", serde_json::json!("0.00"));
        assert!(record.validate(0).is_ok());
    }
}
