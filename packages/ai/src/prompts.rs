// ABOUTME: Prompt assembly for specification generation
// ABOUTME: Category boilerplate lookup and deterministic base prompt rendering

use specgen_core::types::{ProcurementCategory, SubmissionForm};

/// System instruction for the specification generation call
pub const SPEC_SYSTEM_PROMPT: &str = "You are an expert procurement specialist for Australian local councils. Generate professional, comprehensive procurement specifications that comply with Australian government procurement standards and best practices.";

/// Boilerplate focus block for each procurement category. The lookup is
/// exhaustive over the closed enum; consulting is the documented default
/// should the enumeration ever widen.
pub fn category_prompt(category: ProcurementCategory) -> &'static str {
    match category {
        ProcurementCategory::ItServices => {
            "\nFocus on IT service delivery including:\n\
             - Service level agreements (SLAs) with specific uptime requirements\n\
             - Technical support tiers and response times\n\
             - Data security compliance (ISO 27001, Australian Privacy Principles)\n\
             - Integration capabilities with existing council systems\n\
             - Scalability requirements and performance benchmarks\n\
             - Backup, disaster recovery, and business continuity\n\
             - Required vendor certifications and security clearances\n\
             - Change management and version control processes"
        }
        ProcurementCategory::Consulting => {
            "\nFocus on professional consulting services including:\n\
             - Consultant qualifications, certifications, and demonstrated experience\n\
             - Detailed methodology and project approach\n\
             - Clear deliverables with acceptance criteria\n\
             - Knowledge transfer and capability building requirements\n\
             - Intellectual property ownership and licensing\n\
             - Regular reporting schedules and communication protocols\n\
             - Quality assurance frameworks and review processes\n\
             - Risk management and mitigation strategies"
        }
        ProcurementCategory::Construction => {
            "\nFocus on construction and infrastructure including:\n\
             - Compliance with National Construction Code and Australian Standards\n\
             - Work Health and Safety (WHS) requirements and site safety plans\n\
             - Environmental impact assessments and sustainability measures\n\
             - Material specifications, quality standards, and testing requirements\n\
             - Project management methodology and supervision requirements\n\
             - Insurance coverage including public liability and professional indemnity\n\
             - Progress payment schedules and performance guarantees\n\
             - Defects liability period and maintenance requirements"
        }
        ProcurementCategory::Supplies => {
            "\nFocus on goods and supplies procurement including:\n\
             - Detailed product specifications and quality standards\n\
             - Delivery schedules, logistics, and warehousing requirements\n\
             - Warranty terms, after-sales support, and maintenance agreements\n\
             - Volume discounts and bulk purchasing arrangements\n\
             - Sustainability criteria and environmental certifications\n\
             - Local content requirements and supplier diversity\n\
             - Packaging, handling, and storage specifications\n\
             - Returns policy and defect resolution procedures"
        }
        ProcurementCategory::Maintenance => {
            "\nFocus on maintenance and facility services including:\n\
             - Preventive maintenance schedules and procedures\n\
             - Emergency response times and service level commitments\n\
             - Spare parts availability and inventory management\n\
             - Technician qualifications, training, and certifications\n\
             - Equipment lifecycle management and replacement planning\n\
             - Performance monitoring, reporting, and KPI tracking\n\
             - Health and safety compliance for maintenance activities\n\
             - Environmental considerations and waste management"
        }
        ProcurementCategory::ProfessionalServices => {
            "\nFocus on professional advisory services including:\n\
             - Professional registrations, accreditations, and industry memberships\n\
             - Demonstrated expertise and relevant case studies\n\
             - Conflict of interest policies and independence requirements\n\
             - Professional indemnity insurance and liability coverage\n\
             - Confidentiality agreements and data protection measures\n\
             - Quality standards and peer review processes\n\
             - Ongoing support and advisory arrangements\n\
             - Fee structures and billing transparency"
        }
        ProcurementCategory::Equipment => {
            "\nFocus on equipment procurement including:\n\
             - Technical specifications, performance criteria, and testing standards\n\
             - Installation, commissioning, and handover procedures\n\
             - Operator training, certification, and competency requirements\n\
             - Maintenance agreements, service schedules, and support availability\n\
             - Warranty coverage, terms, and claim procedures\n\
             - Compliance with Australian Design Rules and safety standards\n\
             - Energy efficiency ratings and environmental impact\n\
             - Upgrade pathways and future compatibility"
        }
        ProcurementCategory::Software => {
            "\nFocus on software solutions including:\n\
             - Functional requirements and technical specifications\n\
             - Licensing models, user access, and scalability options\n\
             - Data migration, integration, and API requirements\n\
             - Security standards, encryption, and access controls\n\
             - Support levels, response times, and maintenance windows\n\
             - Training programs, documentation, and user adoption\n\
             - Customization capabilities and configuration options\n\
             - Backup, recovery, and business continuity features"
        }
        ProcurementCategory::Training => {
            "\nFocus on training and development services including:\n\
             - Learning objectives, outcomes, and competency frameworks\n\
             - Trainer qualifications, experience, and teaching credentials\n\
             - Training delivery methods (face-to-face, online, blended)\n\
             - Assessment methods, certification, and recognition processes\n\
             - Participant capacity, scheduling, and venue requirements\n\
             - Training materials, resources, and ongoing support\n\
             - Evaluation methods and feedback collection\n\
             - Continuous improvement and program updates"
        }
    }
}

/// Render one bullet line per entry, skipping empty entries
fn bullet_lines(items: &[String]) -> String {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Deterministically render the validated form into the base prompt block
pub fn base_prompt(form: &SubmissionForm) -> String {
    let mut prompt = format!(
        "Project Title: {}\n\
         Department: {}\n\
         Category: {}\n\
         Budget Range: {}\n\
         Timeline: {}\n\
         Urgency: {}\n\
         Contact Person: {}\n\n\
         Key Requirements:\n{}\n",
        form.project_title,
        form.department,
        form.category,
        form.budget_range,
        form.timeline,
        form.urgency,
        form.contact_person,
        bullet_lines(&form.key_requirements),
    );

    if let Some(compliance) = &form.compliance_requirements {
        if !compliance.is_empty() {
            prompt.push_str(&format!(
                "\nCompliance Requirements:\n{}\n",
                bullet_lines(compliance)
            ));
        }
    }

    if let Some(criteria) = &form.success_criteria {
        if !criteria.is_empty() {
            prompt.push_str(&format!("\nSuccess Criteria:\n{}\n", bullet_lines(criteria)));
        }
    }

    if let Some(notes) = &form.additional_notes {
        if !notes.trim().is_empty() {
            prompt.push_str(&format!("\nAdditional Notes: {}\n", notes));
        }
    }

    prompt
}

/// Fixed instruction block naming the eight sections of the document
const SECTION_INSTRUCTION: &str = "Please generate a comprehensive procurement specification with the following sections:\n\
    1. Executive Summary\n\
    2. Project Scope\n\
    3. Requirements\n\
    4. Technical Specifications\n\
    5. Compliance & Standards\n\
    6. Evaluation Criteria\n\
    7. Timeline & Milestones\n\
    8. Budget Considerations\n\n\
    Format the response as a structured document suitable for Australian council procurement processes.";

/// Compose the full generation prompt: base fields, category and domain
/// boilerplate, then the section instruction
pub fn build_generation_prompt(form: &SubmissionForm) -> String {
    let base = base_prompt(form);
    let enhanced = crate::domain_prompts::enhanced_category_prompt(
        form.category,
        form.domain.unwrap_or_default(),
        form.budget_range,
        form.urgency,
    );

    format!("{}\n\n{}\n\n{}", base, enhanced, SECTION_INSTRUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use specgen_core::types::{BudgetRange, DomainType, UrgencyLevel};

    fn sample_form() -> SubmissionForm {
        SubmissionForm {
            project_title: "Fleet Upgrade".to_string(),
            category: ProcurementCategory::Equipment,
            budget_range: BudgetRange::Over1m,
            timeline: "12 months".to_string(),
            urgency: UrgencyLevel::High,
            key_requirements: vec!["GPS tracking".to_string(), "EV compatibility".to_string()],
            compliance_requirements: None,
            success_criteria: None,
            additional_notes: None,
            contact_person: "A. Lee".to_string(),
            department: "Fleet Services".to_string(),
            domain: Some(DomainType::General),
            strategic_priority: None,
        }
    }

    #[test]
    fn test_base_prompt_renders_bullets() {
        let prompt = base_prompt(&sample_form());
        assert!(prompt.contains("Project Title: Fleet Upgrade"));
        assert!(prompt.contains("Category: equipment"));
        assert!(prompt.contains("- GPS tracking"));
        assert!(prompt.contains("- EV compatibility"));
        assert!(!prompt.contains("Compliance Requirements:"));
        assert!(!prompt.contains("Additional Notes:"));
    }

    #[test]
    fn test_base_prompt_skips_empty_bullet_lines() {
        let mut form = sample_form();
        form.key_requirements = vec!["GPS tracking".to_string(), "  ".to_string()];
        form.compliance_requirements = Some(vec!["ISO 9001".to_string()]);

        let prompt = base_prompt(&form);
        assert!(prompt.contains("- GPS tracking"));
        assert!(!prompt.contains("-  "));
        assert!(prompt.contains("Compliance Requirements:\n- ISO 9001"));
    }

    #[test]
    fn test_category_prompt_covers_all_categories() {
        let categories = [
            ProcurementCategory::ItServices,
            ProcurementCategory::Consulting,
            ProcurementCategory::Construction,
            ProcurementCategory::Supplies,
            ProcurementCategory::Maintenance,
            ProcurementCategory::ProfessionalServices,
            ProcurementCategory::Equipment,
            ProcurementCategory::Software,
            ProcurementCategory::Training,
        ];
        for category in categories {
            assert!(category_prompt(category).contains("Focus on"));
        }
    }

    #[test]
    fn test_full_prompt_names_all_sections() {
        let prompt = build_generation_prompt(&sample_form());
        for section in [
            "Executive Summary",
            "Project Scope",
            "Requirements",
            "Technical Specifications",
            "Compliance & Standards",
            "Evaluation Criteria",
            "Timeline & Milestones",
            "Budget Considerations",
        ] {
            assert!(prompt.contains(section), "missing section {}", section);
        }
    }
}
