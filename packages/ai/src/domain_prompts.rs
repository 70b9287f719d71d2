// ABOUTME: Domain knowledge prompt fragments for mining and municipal sectors
// ABOUTME: Strategic procurement context lookup keyed by budget range and urgency

use specgen_core::types::{BudgetRange, DomainType, ProcurementCategory, UrgencyLevel};

/// Mining sector considerations, defined for a subset of categories.
/// Categories without an entry contribute nothing to the prompt.
pub fn mining_enhancements(category: ProcurementCategory) -> &'static str {
    match category {
        ProcurementCategory::ItServices => {
            "\nMINING SECTOR STRATEGIC CONSIDERATIONS:\n\
             - Integration with mine management systems (SCADA, fleet management, geological modeling)\n\
             - Real-time operational data requirements and edge computing capabilities\n\
             - Remote site connectivity challenges and satellite/cellular redundancy\n\
             - Cybersecurity for critical infrastructure and operational technology (OT)\n\
             - Environmental monitoring system integration and regulatory reporting\n\
             - Safety system integration (gas detection, personnel tracking, emergency response)\n\
             - Multi-site deployment considerations across remote mining operations\n\
             - Data sovereignty requirements for geological and operational data"
        }
        ProcurementCategory::Consulting => {
            "\nMINING SECTOR STRATEGIC CONSIDERATIONS:\n\
             - Mining industry expertise and demonstrated experience in similar operations\n\
             - Understanding of mining regulatory framework (state mining acts, environmental regulations)\n\
             - Geotechnical, metallurgical, and processing plant optimization experience\n\
             - ESG and sustainability consulting for mining operations\n\
             - Community relations and indigenous engagement expertise\n\
             - Mine closure planning and rehabilitation consulting\n\
             - Resource estimation and reserve reporting (JORC compliance)\n\
             - Mining equipment selection and operational efficiency optimization"
        }
        ProcurementCategory::Construction => {
            "\nMINING SECTOR STRATEGIC CONSIDERATIONS:\n\
             - Remote location construction challenges and logistics\n\
             - Specialist mining infrastructure (processing plants, tailings facilities, haul roads)\n\
             - Compliance with mining-specific regulations and safety standards\n\
             - Environmental management during construction (dust, noise, water management)\n\
             - Indigenous heritage protection and cultural protocols\n\
             - Extreme weather and geological conditions considerations\n\
             - Access to skilled mining construction workforce\n\
             - Integration with ongoing mining operations and minimal disruption requirements"
        }
        ProcurementCategory::Equipment => {
            "\nMINING SECTOR STRATEGIC CONSIDERATIONS:\n\
             - Heavy-duty mining equipment designed for continuous operation\n\
             - Integration with existing fleet management and maintenance systems\n\
             - Operator certification and specialized training requirements\n\
             - Spare parts availability in remote locations and supply chain resilience\n\
             - Equipment performance in harsh mining environments (dust, vibration, temperature)\n\
             - Automation and autonomous operation capabilities\n\
             - Environmental impact and emissions compliance\n\
             - Total cost of ownership including fuel efficiency and maintenance costs"
        }
        ProcurementCategory::Supplies => {
            "\nMINING SECTOR STRATEGIC CONSIDERATIONS:\n\
             - Mining-specific supplies (explosives, chemicals, protective equipment, consumables)\n\
             - Supply chain resilience for remote operations and emergency inventory\n\
             - Dangerous goods handling, transport, and storage requirements\n\
             - Environmental impact of supplies and packaging waste management\n\
             - Local procurement opportunities and community benefit requirements\n\
             - Quality standards for mining applications and operational reliability\n\
             - Inventory management for seasonal access and weather-related disruptions\n\
             - Integration with mine planning and production scheduling systems"
        }
        _ => "",
    }
}

/// Municipal sector considerations, defined for a subset of categories.
/// Categories without an entry contribute nothing to the prompt.
pub fn municipal_enhancements(category: ProcurementCategory) -> &'static str {
    match category {
        ProcurementCategory::ItServices => {
            "\nMUNICIPAL SECTOR STRATEGIC CONSIDERATIONS:\n\
             - Citizen service delivery platforms and digital government initiatives\n\
             - Integration with existing council systems (rates, permits, asset management)\n\
             - Public transparency and open data requirements\n\
             - Accessibility compliance (WCAG 2.1 AA standards) for diverse community needs\n\
             - Multi-language support for culturally diverse communities\n\
             - Privacy protection for citizen data and Australian Privacy Principles compliance\n\
             - Disaster recovery and business continuity for essential services\n\
             - Cybersecurity for critical municipal infrastructure and citizen data protection"
        }
        ProcurementCategory::Consulting => {
            "\nMUNICIPAL SECTOR STRATEGIC CONSIDERATIONS:\n\
             - Local government expertise and understanding of municipal operations\n\
             - Community engagement and consultation methodology expertise\n\
             - Urban planning, infrastructure, and sustainable development experience\n\
             - Financial management and municipal budgeting expertise\n\
             - Regulatory compliance with local government legislation\n\
             - Strategic planning and community vision development\n\
             - Asset management and infrastructure lifecycle planning\n\
             - Performance measurement and service delivery optimization"
        }
        ProcurementCategory::Construction => {
            "\nMUNICIPAL SECTOR STRATEGIC CONSIDERATIONS:\n\
             - Public infrastructure design for community accessibility and inclusivity\n\
             - Compliance with Disability Discrimination Act and universal design principles\n\
             - Community disruption minimization and stakeholder communication\n\
             - Integration with existing municipal infrastructure and utilities\n\
             - Sustainability and climate resilience requirements\n\
             - Public art and community identity integration opportunities\n\
             - Maintenance access and long-term serviceability considerations\n\
             - Public safety during construction in populated areas"
        }
        ProcurementCategory::Equipment => {
            "\nMUNICIPAL SECTOR STRATEGIC CONSIDERATIONS:\n\
             - Municipal service equipment (waste collection, street maintenance, parks equipment)\n\
             - Multi-purpose equipment for diverse municipal service delivery\n\
             - Operator safety and public interaction considerations\n\
             - Environmental impact and emissions reduction for urban operations\n\
             - Community noise and disruption minimization\n\
             - Local service and maintenance support availability\n\
             - Budget efficiency and total cost of ownership for ratepayer value\n\
             - Integration with municipal asset management systems"
        }
        ProcurementCategory::Supplies => {
            "\nMUNICIPAL SECTOR STRATEGIC CONSIDERATIONS:\n\
             - Municipal service supplies (cleaning materials, signage, park maintenance, office supplies)\n\
             - Bulk purchasing opportunities for cost efficiency across departments\n\
             - Local supplier preference and economic development support\n\
             - Environmental sustainability and waste reduction considerations\n\
             - Community safety and public health requirements\n\
             - Emergency preparedness and disaster response supply needs\n\
             - Quality standards for public infrastructure and community safety\n\
             - Indigenous and local business procurement targets and social outcomes"
        }
        _ => "",
    }
}

/// Strategic procurement context, a budget-range by urgency lookup. Entries
/// exist only for the top bucket; lower budget ranges return the empty
/// string, not an error.
pub fn strategic_context(budget_range: BudgetRange, urgency: UrgencyLevel) -> &'static str {
    match budget_range {
        BudgetRange::Over1m => match urgency {
            UrgencyLevel::Critical => {
                "\nSTRATEGIC PROCUREMENT CONTEXT - CRITICAL HIGH-VALUE CONTRACT:\n\
                 This is a strategic procurement requiring executive oversight and comprehensive risk management.\n\
                 - Implement rigorous vendor due diligence including financial stability analysis\n\
                 - Establish comprehensive performance monitoring and governance frameworks\n\
                 - Consider market impact and supplier relationship management\n\
                 - Implement robust contract management and performance measurement\n\
                 - Plan for stakeholder communication and public accountability\n\
                 - Consider long-term strategic implications and vendor partnership potential"
            }
            UrgencyLevel::High => {
                "\nSTRATEGIC PROCUREMENT CONTEXT - HIGH-VALUE CONTRACT:\n\
                 This procurement requires enhanced governance and strategic planning.\n\
                 - Conduct thorough market analysis and competitive positioning\n\
                 - Implement comprehensive evaluation criteria including strategic alignment\n\
                 - Consider total cost of ownership and lifecycle value\n\
                 - Plan for vendor relationship management and partnership development\n\
                 - Establish clear performance metrics and accountability frameworks\n\
                 - Consider innovation opportunities and future capability development"
            }
            UrgencyLevel::Medium => {
                "\nSTRATEGIC PROCUREMENT CONTEXT - PLANNED HIGH-VALUE CONTRACT:\n\
                 This procurement allows for comprehensive strategic planning and market engagement.\n\
                 - Conduct extensive market consultation and capability assessment\n\
                 - Implement thorough risk assessment and mitigation planning\n\
                 - Consider innovation and capability development opportunities\n\
                 - Plan for comprehensive stakeholder engagement and communication\n\
                 - Establish long-term vendor partnership and relationship management\n\
                 - Optimize for strategic value beyond cost considerations"
            }
            UrgencyLevel::Low => {
                "\nSTRATEGIC PROCUREMENT CONTEXT - LONG-TERM HIGH-VALUE CONTRACT:\n\
                 This procurement enables comprehensive strategic planning and optimization.\n\
                 - Conduct market shaping activities and supplier development\n\
                 - Implement innovation challenges and capability building initiatives\n\
                 - Consider strategic partnership and collaborative arrangements\n\
                 - Plan for comprehensive benchmarking and continuous improvement\n\
                 - Establish industry leadership and best practice development\n\
                 - Optimize for transformational outcomes and strategic advantage"
            }
        },
        _ => "",
    }
}

/// Category prompt enriched with domain knowledge and, for high-value budget
/// ranges, the strategic context block
pub fn enhanced_category_prompt(
    category: ProcurementCategory,
    domain: DomainType,
    budget_range: BudgetRange,
    urgency: UrgencyLevel,
) -> String {
    let mut prompt = crate::prompts::category_prompt(category).to_string();

    match domain {
        DomainType::Mining => {
            let enhancement = mining_enhancements(category);
            if !enhancement.is_empty() {
                prompt.push_str("\n\n");
                prompt.push_str(enhancement);
            }
        }
        DomainType::Municipal => {
            let enhancement = municipal_enhancements(category);
            if !enhancement.is_empty() {
                prompt.push_str("\n\n");
                prompt.push_str(enhancement);
            }
        }
        DomainType::General => {}
    }

    if matches!(budget_range, BudgetRange::Range500k1m | BudgetRange::Over1m) {
        let context = strategic_context(budget_range, urgency);
        if !context.is_empty() {
            prompt.push_str("\n\n");
            prompt.push_str(context);
        }
    }

    prompt
}
