// ABOUTME: Export rendering for stored specifications
// ABOUTME: Flat text and standalone styled HTML documents with fixed section ordering

use crate::types::Specification;

/// Replace every non-alphanumeric character so the title is safe as a filename
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Title-case a kebab-case category value for display ("it-services" -> "It Services")
fn display_category(category: &str) -> String {
    category
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a specification as a flat text document. Section text is embedded
/// verbatim so an exported document reproduces the stored content exactly.
pub fn render_text(spec: &Specification) -> String {
    format!(
        "PROCUREMENT SPECIFICATION\n\
         {}\n\n\
         Generated: {}\n\
         Department: {}\n\
         Category: {}\n\n\
         EXECUTIVE SUMMARY\n{}\n\n\
         PROJECT SCOPE\n{}\n\n\
         REQUIREMENTS\n{}\n\n\
         TECHNICAL SPECIFICATIONS\n{}\n\n\
         COMPLIANCE & STANDARDS\n{}\n\n\
         EVALUATION CRITERIA\n{}\n\n\
         TIMELINE & MILESTONES\n{}\n\n\
         BUDGET CONSIDERATIONS\n{}\n",
        spec.form_data.project_title,
        spec.created_at.format("%Y-%m-%d"),
        spec.form_data.department,
        spec.form_data.category,
        spec.content.executive_summary,
        spec.content.scope,
        spec.content.requirements,
        spec.content.technical_specs,
        spec.content.compliance,
        spec.content.evaluation,
        spec.content.timeline,
        spec.content.budget,
    )
}

/// Render a specification as a standalone HTML document with the fixed visual
/// template: header, project detail grid, the eight sections, and a footer
/// carrying the record identity.
pub fn render_html(spec: &Specification) -> String {
    let form = &spec.form_data;
    let content = &spec.content;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Procurement Specification</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background-color: #f9f9f9;
        }}
        .container {{
            background-color: white;
            padding: 40px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }}
        .header {{
            text-align: center;
            border-bottom: 3px solid #0066cc;
            padding-bottom: 20px;
            margin-bottom: 30px;
        }}
        .header h1 {{
            color: #0066cc;
            margin: 0;
            font-size: 2.5em;
        }}
        .header h2 {{
            color: #666;
            margin: 10px 0;
            font-weight: normal;
        }}
        .project-details {{
            background-color: #f8f9fa;
            padding: 20px;
            border-radius: 5px;
            margin-bottom: 30px;
        }}
        .project-details h3 {{
            margin-top: 0;
            color: #0066cc;
        }}
        .detail-grid {{
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 15px;
        }}
        .detail-item {{
            padding: 10px;
            background-color: white;
            border-radius: 3px;
            border-left: 4px solid #0066cc;
        }}
        .section {{
            margin-bottom: 40px;
        }}
        .section h2 {{
            color: #0066cc;
            border-bottom: 2px solid #0066cc;
            padding-bottom: 10px;
            margin-bottom: 20px;
        }}
        .section-content {{
            white-space: pre-wrap;
            text-align: justify;
        }}
        .footer {{
            text-align: center;
            margin-top: 50px;
            padding-top: 20px;
            border-top: 1px solid #ddd;
            color: #666;
            font-size: 0.9em;
        }}
        @media print {{
            body {{ background-color: white; }}
            .container {{ box-shadow: none; }}
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>PROCUREMENT SPECIFICATION</h1>
            <h2>{title}</h2>
            <p>Generated on {generated}</p>
        </div>

        <div class="project-details">
            <h3>Project Details</h3>
            <div class="detail-grid">
                <div class="detail-item">
                    <strong>Department:</strong> {department}
                </div>
                <div class="detail-item">
                    <strong>Category:</strong> {category}
                </div>
                <div class="detail-item">
                    <strong>Budget Range:</strong> {budget_range}
                </div>
                <div class="detail-item">
                    <strong>Timeline:</strong> {timeline}
                </div>
                <div class="detail-item">
                    <strong>Urgency:</strong> {urgency}
                </div>
                <div class="detail-item">
                    <strong>Contact Person:</strong> {contact}
                </div>
            </div>
        </div>

        <div class="section">
            <h2>Executive Summary</h2>
            <div class="section-content">{executive_summary}</div>
        </div>

        <div class="section">
            <h2>Project Scope</h2>
            <div class="section-content">{scope}</div>
        </div>

        <div class="section">
            <h2>Requirements</h2>
            <div class="section-content">{requirements}</div>
        </div>

        <div class="section">
            <h2>Technical Specifications</h2>
            <div class="section-content">{technical_specs}</div>
        </div>

        <div class="section">
            <h2>Compliance &amp; Standards</h2>
            <div class="section-content">{compliance}</div>
        </div>

        <div class="section">
            <h2>Evaluation Criteria</h2>
            <div class="section-content">{evaluation}</div>
        </div>

        <div class="section">
            <h2>Timeline &amp; Milestones</h2>
            <div class="section-content">{timeline_section}</div>
        </div>

        <div class="section">
            <h2>Budget Considerations</h2>
            <div class="section-content">{budget}</div>
        </div>

        <div class="footer">
            <p>Generated by Specgen AI Specification Generator</p>
            <p>Specification ID: {id} | Version: {version}</p>
        </div>
    </div>
</body>
</html>"#,
        title = form.project_title,
        generated = spec.created_at.format("%Y-%m-%d"),
        department = form.department,
        category = display_category(&form.category.to_string()),
        budget_range = form.budget_range,
        timeline = form.timeline,
        urgency = form.urgency,
        contact = form.contact_person,
        executive_summary = content.executive_summary,
        scope = content.scope,
        requirements = content.requirements,
        technical_specs = content.technical_specs,
        compliance = content.compliance,
        evaluation = content.evaluation,
        timeline_section = content.timeline,
        budget = content.budget,
        id = spec.id,
        version = spec.version,
    )
}
