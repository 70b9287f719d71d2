// ABOUTME: Risk assessment generation for strategic procurements
// ABOUTME: Second-round provider call, tolerant JSON recovery, mitigation synthesis

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use specgen_core::types::{GeneratedContent, SubmissionForm};

use crate::service::AIService;

const RISK_MAX_TOKENS: u32 = 3000;
const RISK_TEMPERATURE: f32 = 0.2;

const RISK_SYSTEM_PROMPT: &str = "You are a strategic risk assessment specialist for complex procurement contracts. \
    Analyze procurement specifications and identify potential risks across financial, operational, \
    technical, compliance, market, supplier, reputational, environmental, and political dimensions.\n\n\
    Return your assessment as a structured JSON object with risk categories, scores (0-100), \
    impact levels, probability assessments, and specific risk factors with evidence.";

/// The nine fixed risk dimensions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskType {
    Financial,
    Operational,
    Technical,
    Compliance,
    Market,
    Supplier,
    Reputational,
    Environmental,
    Political,
}

impl RiskType {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "financial" => Some(RiskType::Financial),
            "operational" => Some(RiskType::Operational),
            "technical" => Some(RiskType::Technical),
            "compliance" => Some(RiskType::Compliance),
            "market" => Some(RiskType::Market),
            "supplier" => Some(RiskType::Supplier),
            "reputational" => Some(RiskType::Reputational),
            "environmental" => Some(RiskType::Environmental),
            "political" => Some(RiskType::Political),
            _ => None,
        }
    }
}

/// Ordinal risk level shared by the overall assessment and category impacts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            "critical" => Some(RiskLevel::Critical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskProbability {
    Unlikely,
    Possible,
    Likely,
    Certain,
}

impl RiskProbability {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "unlikely" => Some(RiskProbability::Unlikely),
            "possible" => Some(RiskProbability::Possible),
            "likely" => Some(RiskProbability::Likely),
            "certain" => Some(RiskProbability::Certain),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MitigationStatus {
    Planned,
    Implementing,
    Completed,
    Monitoring,
}

/// A single identified risk with severity and likelihood on a 1-10 scale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskFactor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: i64,
    pub likelihood: i64,
    #[serde(rename = "evidenceSource")]
    pub evidence_source: String,
    pub category: RiskType,
}

/// One analyzed risk dimension with its contributing factors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskCategory {
    #[serde(rename = "type")]
    pub risk_type: RiskType,
    pub score: f64,
    pub impact: RiskLevel,
    pub probability: RiskProbability,
    pub factors: Vec<RiskFactor>,
}

/// A templated remedial action derived from a high-scoring risk factor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MitigationStrategy {
    pub id: String,
    #[serde(rename = "riskFactorId")]
    pub risk_factor_id: String,
    pub strategy: String,
    #[serde(rename = "responsibleParty")]
    pub responsible_party: String,
    pub timeframe: String,
    pub cost: f64,
    pub effectiveness: i64,
    pub status: MitigationStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub id: String,
    #[serde(rename = "specificationId")]
    pub specification_id: String,
    #[serde(rename = "overallRiskScore")]
    pub overall_risk_score: f64,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    pub categories: Vec<RiskCategory>,
    #[serde(rename = "mitigationStrategies")]
    pub mitigation_strategies: Vec<MitigationStrategy>,
    #[serde(rename = "assessedAt")]
    pub assessed_at: DateTime<Utc>,
    #[serde(rename = "assessedBy")]
    pub assessed_by: String,
    #[serde(rename = "reviewDate")]
    pub review_date: DateTime<Utc>,
}

/// Result of a risk assessment round trip. Degraded carries the fallback
/// assessment produced when the provider call or response recovery failed;
/// callers continue either way but can tell the difference.
#[derive(Debug, Clone)]
pub enum RiskOutcome {
    Assessed(RiskAssessment),
    Degraded(RiskAssessment),
}

impl RiskOutcome {
    pub fn assessment(&self) -> &RiskAssessment {
        match self {
            RiskOutcome::Assessed(assessment) | RiskOutcome::Degraded(assessment) => assessment,
        }
    }

    pub fn into_assessment(self) -> RiskAssessment {
        match self {
            RiskOutcome::Assessed(assessment) | RiskOutcome::Degraded(assessment) => assessment,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, RiskOutcome::Degraded(_))
    }
}

/// Categories scoring above this threshold have mitigation strategies
/// synthesized for each of their factors
const MITIGATION_SCORE_THRESHOLD: f64 = 60.0;

/// Fixed mitigation template per risk dimension
pub fn mitigation_template(risk_type: RiskType) -> &'static str {
    match risk_type {
        RiskType::Financial => "Implement robust budget monitoring, require detailed cost breakdowns, include price escalation clauses",
        RiskType::Operational => "Establish clear SLAs, implement performance monitoring, develop contingency plans",
        RiskType::Technical => "Conduct technical due diligence, require proof of concept, plan phased implementation",
        RiskType::Compliance => "Engage legal experts, conduct compliance audits, implement monitoring systems",
        RiskType::Market => "Conduct market analysis, engage multiple suppliers, develop backup options",
        RiskType::Supplier => "Perform vendor due diligence, require financial guarantees, implement performance bonds",
        RiskType::Reputational => "Develop communication strategy, engage stakeholders early, implement transparency measures",
        RiskType::Environmental => "Conduct environmental impact assessment, require sustainability certifications",
        RiskType::Political => "Engage government relations, monitor policy changes, develop advocacy strategy",
    }
}

/// Service issuing the second-round risk assessment call
pub struct RiskAssessmentService {
    ai: Arc<AIService>,
}

impl RiskAssessmentService {
    pub fn new(ai: Arc<AIService>) -> Self {
        Self { ai }
    }

    /// Generate a risk assessment for a strategic submission. Failures never
    /// propagate: a transport, parse, or shape failure produces the degraded
    /// fallback assessment instead.
    pub async fn generate_risk_assessment(
        &self,
        specification_id: &str,
        form: &SubmissionForm,
        content: &GeneratedContent,
    ) -> RiskOutcome {
        let prompt = build_risk_prompt(form, content);

        let response = self
            .ai
            .generate_text(
                prompt,
                Some(RISK_SYSTEM_PROMPT.to_string()),
                RISK_MAX_TOKENS,
                RISK_TEMPERATURE,
            )
            .await;

        match response {
            Ok(response) => parse_risk_assessment(specification_id, &response.data),
            Err(e) => {
                warn!("Risk assessment call failed, using fallback: {}", e);
                RiskOutcome::Degraded(fallback_assessment(specification_id))
            }
        }
    }
}

/// Render the risk assessment request prompt
pub fn build_risk_prompt(form: &SubmissionForm, content: &GeneratedContent) -> String {
    let requirements = form
        .key_requirements
        .iter()
        .map(|req| format!("- {}", req))
        .collect::<Vec<_>>()
        .join("\n");

    let compliance_block = match &form.compliance_requirements {
        Some(items) if !items.is_empty() => {
            let bullets = items
                .iter()
                .map(|req| format!("- {}", req))
                .collect::<Vec<_>>()
                .join("\n");
            format!("\nCompliance Requirements:\n{}\n", bullets)
        }
        _ => String::new(),
    };

    format!(
        "PROCUREMENT RISK ASSESSMENT REQUEST\n\n\
         Project Details:\n\
         - Title: {}\n\
         - Category: {}\n\
         - Budget Range: {}\n\
         - Timeline: {}\n\
         - Urgency: {}\n\
         - Department: {}\n\n\
         Key Requirements:\n{}\n\
         {}\n\
         Generated Specification Scope:\n{}\n\n\
         Technical Specifications:\n{}\n\n\
         Please assess risks across these categories:\n\
         1. FINANCIAL: Budget overruns, cost escalation, hidden costs\n\
         2. OPERATIONAL: Service delivery, performance, business disruption\n\
         3. TECHNICAL: Implementation complexity, integration risks, obsolescence\n\
         4. COMPLIANCE: Regulatory, legal, standards adherence\n\
         5. MARKET: Supplier availability, competition, pricing volatility\n\
         6. SUPPLIER: Vendor capability, financial stability, performance history\n\
         7. REPUTATIONAL: Public perception, stakeholder confidence, media attention\n\
         8. ENVIRONMENTAL: Sustainability, environmental impact, climate risks\n\
         9. POLITICAL: Policy changes, political stability, public scrutiny\n\n\
         For each category, provide:\n\
         - Risk score (0-100)\n\
         - Impact level (low/medium/high/critical)\n\
         - Probability (unlikely/possible/likely/certain)\n\
         - 3-5 specific risk factors with descriptions\n\
         - Evidence sources or reasoning\n\n\
         Format as JSON with this structure:\n\
         {{\n\
           \"overallRiskScore\": number,\n\
           \"riskLevel\": \"low|medium|high|critical\",\n\
           \"categories\": [\n\
             {{\n\
               \"type\": \"financial\",\n\
               \"score\": number,\n\
               \"impact\": \"low|medium|high|critical\",\n\
               \"probability\": \"unlikely|possible|likely|certain\",\n\
               \"factors\": [\n\
                 {{\n\
                   \"name\": \"string\",\n\
                   \"description\": \"string\",\n\
                   \"severity\": number (1-10),\n\
                   \"likelihood\": number (1-10),\n\
                   \"evidenceSource\": \"string\"\n\
                 }}\n\
               ]\n\
             }}\n\
           ]\n\
         }}",
        form.project_title,
        form.category,
        form.budget_range,
        form.timeline,
        form.urgency,
        form.department,
        requirements,
        compliance_block,
        content.scope,
        content.technical_specs,
    )
}

/// Recover a risk assessment from free-form response text. The first
/// brace-delimited substring is parsed; any parse or shape failure yields the
/// degraded fallback rather than an error.
pub fn parse_risk_assessment(specification_id: &str, response: &str) -> RiskOutcome {
    let start = response.find('{');
    let end = response.rfind('}');

    let (start, end) = match (start, end) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => {
            warn!("No JSON object found in risk assessment response, using fallback");
            return RiskOutcome::Degraded(fallback_assessment(specification_id));
        }
    };

    let parsed: Value = match serde_json::from_str(&response[start..=end]) {
        Ok(value) => value,
        Err(e) => {
            warn!("Risk assessment JSON parse failed, using fallback: {}", e);
            return RiskOutcome::Degraded(fallback_assessment(specification_id));
        }
    };

    let categories = process_categories(parsed.get("categories").and_then(Value::as_array));
    let mitigation_strategies = synthesize_mitigations(&categories);

    let assessed_at = Utc::now();
    RiskOutcome::Assessed(RiskAssessment {
        id: Uuid::new_v4().to_string(),
        specification_id: specification_id.to_string(),
        overall_risk_score: parsed
            .get("overallRiskScore")
            .and_then(Value::as_f64)
            .unwrap_or(50.0),
        risk_level: parsed
            .get("riskLevel")
            .and_then(Value::as_str)
            .and_then(RiskLevel::parse)
            .unwrap_or(RiskLevel::Medium),
        categories,
        mitigation_strategies,
        assessed_at,
        assessed_by: "AI Risk Engine".to_string(),
        review_date: assessed_at + Duration::days(30),
    })
}

fn process_categories(raw: Option<&Vec<Value>>) -> Vec<RiskCategory> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.iter()
        .filter_map(|cat| {
            let risk_type = cat
                .get("type")
                .and_then(Value::as_str)
                .and_then(RiskType::parse);
            let Some(risk_type) = risk_type else {
                debug!("Dropping risk category with unrecognized type");
                return None;
            };

            let factors = cat
                .get("factors")
                .and_then(Value::as_array)
                .map(|factors| {
                    factors
                        .iter()
                        .map(|factor| RiskFactor {
                            id: Uuid::new_v4().to_string(),
                            name: factor
                                .get("name")
                                .and_then(Value::as_str)
                                .unwrap_or("Unnamed Risk Factor")
                                .to_string(),
                            description: factor
                                .get("description")
                                .and_then(Value::as_str)
                                .unwrap_or("No description provided")
                                .to_string(),
                            severity: factor.get("severity").and_then(Value::as_i64).unwrap_or(5),
                            likelihood: factor
                                .get("likelihood")
                                .and_then(Value::as_i64)
                                .unwrap_or(5),
                            evidence_source: factor
                                .get("evidenceSource")
                                .and_then(Value::as_str)
                                .unwrap_or("AI Analysis")
                                .to_string(),
                            category: risk_type,
                        })
                        .collect()
                })
                .unwrap_or_default();

            Some(RiskCategory {
                risk_type,
                score: cat.get("score").and_then(Value::as_f64).unwrap_or(50.0),
                impact: cat
                    .get("impact")
                    .and_then(Value::as_str)
                    .and_then(RiskLevel::parse)
                    .unwrap_or(RiskLevel::Medium),
                probability: cat
                    .get("probability")
                    .and_then(Value::as_str)
                    .and_then(RiskProbability::parse)
                    .unwrap_or(RiskProbability::Possible),
                factors,
            })
        })
        .collect()
}

/// One strategy per factor of every category scoring above the threshold
pub fn synthesize_mitigations(categories: &[RiskCategory]) -> Vec<MitigationStrategy> {
    let mut strategies = Vec::new();

    for category in categories {
        if category.score > MITIGATION_SCORE_THRESHOLD {
            for factor in &category.factors {
                strategies.push(MitigationStrategy {
                    id: Uuid::new_v4().to_string(),
                    risk_factor_id: factor.id.clone(),
                    strategy: mitigation_template(category.risk_type).to_string(),
                    responsible_party: "Project Manager".to_string(),
                    timeframe: "During procurement phase".to_string(),
                    cost: 0.0,
                    effectiveness: 7,
                    status: MitigationStatus::Planned,
                });
            }
        }
    }

    strategies
}

/// Hard-coded assessment used when the provider response cannot be recovered
pub fn fallback_assessment(specification_id: &str) -> RiskAssessment {
    let assessed_at = Utc::now();
    RiskAssessment {
        id: Uuid::new_v4().to_string(),
        specification_id: specification_id.to_string(),
        overall_risk_score: 50.0,
        risk_level: RiskLevel::Medium,
        categories: Vec::new(),
        mitigation_strategies: Vec::new(),
        assessed_at,
        assessed_by: "AI Risk Engine (Fallback)".to_string(),
        review_date: assessed_at + Duration::days(30),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn risk_json() -> String {
        serde_json::json!({
            "overallRiskScore": 72,
            "riskLevel": "high",
            "categories": [
                {
                    "type": "financial",
                    "score": 75,
                    "impact": "high",
                    "probability": "likely",
                    "factors": [
                        {"name": "Cost escalation", "description": "Prices may rise", "severity": 8, "likelihood": 7, "evidenceSource": "Market data"},
                        {"name": "Hidden costs", "description": "Unbudgeted extras", "severity": 6, "likelihood": 6, "evidenceSource": "History"},
                        {"name": "Budget overrun", "description": "Scope growth", "severity": 7, "likelihood": 5, "evidenceSource": "Analysis"}
                    ]
                },
                {
                    "type": "technical",
                    "score": 40,
                    "impact": "medium",
                    "probability": "possible",
                    "factors": [
                        {"name": "Integration", "description": "Legacy systems", "severity": 5, "likelihood": 4, "evidenceSource": "Review"}
                    ]
                }
            ]
        })
        .to_string()
    }

    #[test]
    fn test_parse_embedded_json_with_surrounding_prose() {
        let response = format!("Here is my assessment:\n\n{}\n\nLet me know.", risk_json());
        let outcome = parse_risk_assessment("spec-1", &response);

        assert!(!outcome.is_degraded());
        let assessment = outcome.assessment();
        assert_eq!(assessment.overall_risk_score, 72.0);
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_eq!(assessment.categories.len(), 2);
        assert_eq!(assessment.categories[0].factors.len(), 3);
        assert_eq!(assessment.categories[1].factors.len(), 1);
        assert_eq!(assessment.specification_id, "spec-1");
    }

    #[test]
    fn test_no_braces_yields_fallback() {
        let outcome = parse_risk_assessment("spec-1", "I cannot provide an assessment.");

        assert!(outcome.is_degraded());
        let assessment = outcome.assessment();
        assert_eq!(assessment.overall_risk_score, 50.0);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
        assert!(assessment.categories.is_empty());
        assert!(assessment.mitigation_strategies.is_empty());
        assert_eq!(assessment.assessed_by, "AI Risk Engine (Fallback)");
    }

    #[test]
    fn test_malformed_json_yields_fallback() {
        let outcome = parse_risk_assessment("spec-1", "{ not valid json }");
        assert!(outcome.is_degraded());
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let response = r#"{"categories": [{"type": "supplier", "factors": [{}]}]}"#;
        let outcome = parse_risk_assessment("spec-1", response);

        assert!(!outcome.is_degraded());
        let assessment = outcome.assessment();
        assert_eq!(assessment.overall_risk_score, 50.0);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);

        let category = &assessment.categories[0];
        assert_eq!(category.score, 50.0);
        assert_eq!(category.impact, RiskLevel::Medium);
        assert_eq!(category.probability, RiskProbability::Possible);

        let factor = &category.factors[0];
        assert_eq!(factor.name, "Unnamed Risk Factor");
        assert_eq!(factor.description, "No description provided");
        assert_eq!(factor.severity, 5);
        assert_eq!(factor.likelihood, 5);
        assert_eq!(factor.evidence_source, "AI Analysis");
    }

    #[test]
    fn test_unrecognized_category_type_dropped() {
        let response = r#"{"categories": [{"type": "astrological", "score": 90, "factors": []}]}"#;
        let outcome = parse_risk_assessment("spec-1", response);
        assert!(outcome.assessment().categories.is_empty());
    }

    #[test]
    fn test_mitigations_only_for_high_scoring_categories() {
        let response = format!("prefix {} suffix", risk_json());
        let outcome = parse_risk_assessment("spec-1", &response);
        let assessment = outcome.assessment();

        // financial scores 75 with 3 factors; technical scores 40 and contributes none
        assert_eq!(assessment.mitigation_strategies.len(), 3);
        for strategy in &assessment.mitigation_strategies {
            assert_eq!(strategy.strategy, mitigation_template(RiskType::Financial));
            assert_eq!(strategy.responsible_party, "Project Manager");
            assert_eq!(strategy.status, MitigationStatus::Planned);
        }
    }

    #[test]
    fn test_mitigations_link_back_to_factors() {
        let response = risk_json();
        let outcome = parse_risk_assessment("spec-1", &response);
        let assessment = outcome.assessment();

        let factor_ids: Vec<&str> = assessment.categories[0]
            .factors
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        for strategy in &assessment.mitigation_strategies {
            assert!(factor_ids.contains(&strategy.risk_factor_id.as_str()));
        }
    }

    #[test]
    fn test_review_date_thirty_days_out() {
        let assessment = fallback_assessment("spec-1");
        assert_eq!(assessment.review_date - assessment.assessed_at, Duration::days(30));
    }
}
