pub const DEFAULT_AREA: &str = "Lombardia";

const QUERY_TIMEOUT_SECS: u32 = 25;

const SHELTER_FILTERS: [&str; 2] = [
    r#"["tourism"~"wilderness_hut|alpine_hut"]"#,
    r#"["shelter_type"="basic_hut"]"#,
];

const ELEMENT_KINDS: [&str; 3] = ["node", "way", "relation"];

#[derive(Debug, PartialEq, Clone)]
pub struct ShelterQuery {
    area: String,
    timeout_secs: u32,
}

impl ShelterQuery {
    pub fn for_area(area: &str) -> Self {
        Self {
            area: area.to_string(),
            timeout_secs: QUERY_TIMEOUT_SECS,
        }
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn to_ql(&self) -> String {
        let mut selections = String::new();
        for kind in ELEMENT_KINDS {
            for filter in SHELTER_FILTERS {
                selections.push_str(&format!("  {kind}{filter}(area.searchArea);\n"));
            }
        }
        format!(
            "[out:json][timeout:{timeout}];\narea[\"name\"=\"{area}\"]->.searchArea;\n(\n{selections});\nout body geom;\n",
            timeout = self.timeout_secs,
            area = self.area,
            selections = selections,
        )
    }
}
