use schemars::schema_for;

use crate::json::scenario_input;

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(scenario_input::JsonScenario))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_names_the_scenario_records() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"Scenario\""));
        assert!(schema.contains("\"Driver\""));
        assert!(schema.contains("\"Load\""));
    }
}
