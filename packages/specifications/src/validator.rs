// ABOUTME: Schema validation and normalization of raw form submissions
// ABOUTME: Produces a canonical SubmissionForm or a list of human-readable errors

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::types::{
    BudgetRange, DomainType, ProcurementCategory, StrategicPriority, SubmissionForm, UrgencyLevel,
};

const CATEGORY_VALUES: &str = "it-services, consulting, construction, supplies, maintenance, professional-services, equipment, software, training";
const BUDGET_VALUES: &str = "under-10k, 10k-50k, 50k-100k, 100k-500k, 500k-1m, over-1m";
const URGENCY_VALUES: &str = "low, medium, high, critical";
const DOMAIN_VALUES: &str = "general, mining, municipal";
const PRIORITY_VALUES: &str = "cost-optimization, innovation-focus, risk-mitigation, capability-building, strategic-partnership";

/// A field that may arrive as a single string or a list of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// Loose wire shape of a form submission, before validation
#[derive(Debug, Deserialize)]
struct SubmissionPayload {
    #[serde(rename = "projectTitle")]
    project_title: Option<String>,
    category: Option<String>,
    #[serde(rename = "budgetRange")]
    budget_range: Option<String>,
    timeline: Option<String>,
    urgency: Option<String>,
    #[serde(rename = "keyRequirements")]
    key_requirements: Option<OneOrMany>,
    #[serde(rename = "complianceRequirements")]
    compliance_requirements: Option<OneOrMany>,
    #[serde(rename = "successCriteria")]
    success_criteria: Option<OneOrMany>,
    #[serde(rename = "additionalNotes")]
    additional_notes: Option<String>,
    #[serde(rename = "contactPerson")]
    contact_person: Option<String>,
    department: Option<String>,
    domain: Option<String>,
    #[serde(rename = "strategicPriority")]
    strategic_priority: Option<String>,
}

fn parse_enum<T: DeserializeOwned>(
    field: &str,
    value: &str,
    allowed: &str,
    errors: &mut Vec<String>,
) -> Option<T> {
    match serde_json::from_value(Value::String(value.to_string())) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.push(format!("{} must be one of: {}", field, allowed));
            None
        }
    }
}

fn required_string(
    field: &str,
    value: Option<&String>,
    min_len: usize,
    errors: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(value) if value.trim().len() >= min_len => Some(value.clone()),
        Some(value) if value.trim().is_empty() => {
            errors.push(format!("{} is required", field));
            None
        }
        Some(_) => {
            errors.push(format!("{} must be at least {} characters", field, min_len));
            None
        }
        None => {
            errors.push(format!("{} is required", field));
            None
        }
    }
}

/// Validate and normalize a raw submission. All rules are checked and every
/// failure is reported; the result is all-or-nothing.
pub fn validate_submission(payload: &Value) -> Result<SubmissionForm, Vec<String>> {
    let payload: SubmissionPayload = match serde_json::from_value(payload.clone()) {
        Ok(payload) => payload,
        Err(e) => return Err(vec![format!("Invalid request body: {}", e)]),
    };

    let mut errors = Vec::new();

    let project_title =
        required_string("projectTitle", payload.project_title.as_ref(), 3, &mut errors);

    let category = match payload.category.as_deref() {
        Some(value) => {
            parse_enum::<ProcurementCategory>("category", value, CATEGORY_VALUES, &mut errors)
        }
        None => {
            errors.push("category is required".to_string());
            None
        }
    };

    let budget_range = match payload.budget_range.as_deref() {
        Some(value) => parse_enum::<BudgetRange>("budgetRange", value, BUDGET_VALUES, &mut errors),
        None => {
            errors.push("budgetRange is required".to_string());
            None
        }
    };

    let timeline = required_string("timeline", payload.timeline.as_ref(), 1, &mut errors);

    let urgency = match payload.urgency.as_deref() {
        Some(value) => parse_enum::<UrgencyLevel>("urgency", value, URGENCY_VALUES, &mut errors),
        None => {
            errors.push("urgency is required".to_string());
            None
        }
    };

    let key_requirements = match payload.key_requirements {
        Some(value) => {
            let requirements = value.into_vec();
            if requirements.iter().all(|req| req.trim().is_empty()) {
                errors.push("keyRequirements must contain at least one requirement".to_string());
                None
            } else {
                Some(requirements)
            }
        }
        None => {
            errors.push("keyRequirements is required".to_string());
            None
        }
    };

    let compliance_requirements = payload.compliance_requirements.map(OneOrMany::into_vec);
    let success_criteria = payload.success_criteria.map(OneOrMany::into_vec);

    let contact_person =
        required_string("contactPerson", payload.contact_person.as_ref(), 2, &mut errors);
    let department = required_string("department", payload.department.as_ref(), 2, &mut errors);

    let domain = match payload.domain.as_deref() {
        Some(value) => parse_enum::<DomainType>("domain", value, DOMAIN_VALUES, &mut errors),
        None => None,
    };

    let strategic_priority = match payload.strategic_priority.as_deref() {
        Some(value) => parse_enum::<StrategicPriority>(
            "strategicPriority",
            value,
            PRIORITY_VALUES,
            &mut errors,
        ),
        None => None,
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // All unwraps below are guarded by the error check above
    Ok(SubmissionForm {
        project_title: project_title.unwrap(),
        category: category.unwrap(),
        budget_range: budget_range.unwrap(),
        timeline: timeline.unwrap(),
        urgency: urgency.unwrap(),
        key_requirements: key_requirements.unwrap(),
        compliance_requirements,
        success_criteria,
        additional_notes: payload.additional_notes,
        contact_person: contact_person.unwrap(),
        department: department.unwrap(),
        domain,
        strategic_priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "projectTitle": "Fleet Upgrade",
            "category": "equipment",
            "budgetRange": "over-1m",
            "timeline": "12 months",
            "urgency": "high",
            "keyRequirements": ["GPS tracking", "EV compatibility"],
            "contactPerson": "A. Lee",
            "department": "Fleet Services"
        })
    }

    #[test]
    fn test_valid_payload_normalizes() {
        let form = validate_submission(&valid_payload()).unwrap();
        assert_eq!(form.project_title, "Fleet Upgrade");
        assert_eq!(form.category, ProcurementCategory::Equipment);
        assert_eq!(form.budget_range, BudgetRange::Over1m);
        assert_eq!(form.key_requirements.len(), 2);
        assert!(form.domain.is_none());
    }

    #[test]
    fn test_single_string_requirements_accepted() {
        let mut payload = valid_payload();
        payload["keyRequirements"] = json!("GPS tracking");
        let form = validate_submission(&payload).unwrap();
        assert_eq!(form.key_requirements, vec!["GPS tracking".to_string()]);
    }

    #[test]
    fn test_string_or_list_optional_fields() {
        let mut payload = valid_payload();
        payload["complianceRequirements"] = json!("ISO 9001");
        payload["successCriteria"] = json!(["On budget", "On time"]);
        let form = validate_submission(&payload).unwrap();
        assert_eq!(form.compliance_requirements, Some(vec!["ISO 9001".to_string()]));
        assert_eq!(
            form.success_criteria,
            Some(vec!["On budget".to_string(), "On time".to_string()])
        );
    }

    #[test]
    fn test_short_title_rejected() {
        let mut payload = valid_payload();
        payload["projectTitle"] = json!("Ab");
        let errors = validate_submission(&payload).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("projectTitle")));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut payload = valid_payload();
        payload["category"] = json!("catering");
        let errors = validate_submission(&payload).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("category")));
    }

    #[test]
    fn test_unknown_budget_and_urgency_rejected() {
        let mut payload = valid_payload();
        payload["budgetRange"] = json!("about-a-million");
        payload["urgency"] = json!("yesterday");
        let errors = validate_submission(&payload).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("budgetRange")));
        assert!(errors.iter().any(|e| e.contains("urgency")));
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let errors = validate_submission(&json!({})).unwrap_err();
        for field in [
            "projectTitle",
            "category",
            "budgetRange",
            "timeline",
            "urgency",
            "keyRequirements",
            "contactPerson",
            "department",
        ] {
            assert!(
                errors.iter().any(|e| e.contains(field)),
                "no error naming {}",
                field
            );
        }
    }

    #[test]
    fn test_empty_requirements_rejected() {
        let mut payload = valid_payload();
        payload["keyRequirements"] = json!(["", "   "]);
        let errors = validate_submission(&payload).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("keyRequirements")));
    }

    #[test]
    fn test_invalid_domain_rejected() {
        let mut payload = valid_payload();
        payload["domain"] = json!("agriculture");
        let errors = validate_submission(&payload).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("domain")));
    }

    #[test]
    fn test_optional_domain_and_priority_accepted() {
        let mut payload = valid_payload();
        payload["domain"] = json!("mining");
        payload["strategicPriority"] = json!("risk-mitigation");
        let form = validate_submission(&payload).unwrap();
        assert_eq!(form.domain, Some(DomainType::Mining));
        assert_eq!(form.strategic_priority, Some(StrategicPriority::RiskMitigation));
    }
}
