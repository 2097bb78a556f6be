use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::documents::validation::STATE_CODES;

/// Example formation request served by the schema endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormationExample {
    pub company_name: String,
    pub state_of_formation: String,
    pub company_type: String,
    pub incorporator_name: String,
}

impl FormationExample {
    fn new(company_name: &str, state: &str, company_type: &str, incorporator: &str) -> Self {
        Self {
            company_name: company_name.to_string(),
            state_of_formation: state.to_string(),
            company_type: company_type.to_string(),
            incorporator_name: incorporator.to_string(),
        }
    }
}

/// One example per supported (state, entity type) pair.
pub fn formation_examples() -> Vec<FormationExample> {
    vec![
        FormationExample::new("Acme Corp, Inc.", "DE", "corporation", "John Smith"),
        FormationExample::new("Smith & Sons, LLC", "DE", "LLC", "Jane Doe"),
        FormationExample::new("Tech Innovators Co.", "CA", "corporation", "Michael Johnson"),
        FormationExample::new("California Dreaming, LLC", "CA", "LLC", "Emily Chen"),
    ]
}

/// HTML form that posts to `/form-company`.
pub fn formation_form_html() -> String {
    let options: String = STATE_CODES
        .iter()
        .map(|code| format!(r#"<option value="{code}">{code}</option>"#))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Company Formation</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; }}
        form {{ display: grid; gap: 15px; }}
        label {{ font-weight: bold; }}
        input, select {{ padding: 8px; font-size: 16px; }}
        button {{ background: #007bff; color: white; border: none; padding: 10px 20px; cursor: pointer; }}
        button:hover {{ background: #0056b3; }}
    </style>
</head>
<body>
    <h1>Company Formation</h1>
    <form action="/form-company" method="POST">
        <label for="company_name">Company Name:</label>
        <input type="text" id="company_name" name="company_name" required>

        <label for="state_of_formation">State of Formation:</label>
        <select id="state_of_formation" name="state_of_formation" required>
            <option value="">Select a state</option>
            {options}
        </select>

        <label for="company_type">Company Type:</label>
        <select id="company_type" name="company_type" required>
            <option value="">Select a type</option>
            <option value="corporation">Corporation</option>
            <option value="LLC">LLC</option>
        </select>

        <label for="incorporator_name">Incorporator Name:</label>
        <input type="text" id="incorporator_name" name="incorporator_name" required>

        <button type="submit">Submit</button>
    </form>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::{CompanyFormationRequest, Validator};

    #[test]
    fn test_examples_are_valid_requests() {
        for example in formation_examples() {
            let request = CompanyFormationRequest {
                company_name: Some(example.company_name.clone()),
                state_of_formation: Some(example.state_of_formation.clone()),
                company_type: Some(example.company_type.clone()),
                incorporator_name: Some(example.incorporator_name.clone()),
            };
            assert!(request.validate().is_ok(), "{:?}", example);
        }
    }

    #[test]
    fn test_form_lists_every_state() {
        let html = formation_form_html();
        for code in STATE_CODES {
            assert!(html.contains(&format!(r#"<option value="{code}">"#)));
        }
        assert!(html.contains(r#"action="/form-company""#));
    }
}
