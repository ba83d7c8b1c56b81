use geo::Point;

use crate::map_data::marker::{ShelterInfo, ShelterMarker};

// Trimmed-down Overpass response with one element of every shape the API
// returns for the shelter query:
//   - node with tags (Rifugio S.E.V.)
//   - node with tags using beds instead of capacity (Bivacco Festa)
//   - node without tags
//   - way with bounds, nodes and geometry (Rifugio Bellasca)
//   - relation with bounds and members (Rifugio Menaggio)
pub fn get_test_overpass_json() -> Vec<&'static str> {
    vec![
        r#"{"#,
        r#"  "version": 0.6,"#,
        r#"  "generator": "Overpass API 0.7.62.1 084b4234","#,
        r#"  "osm3s": {"#,
        r#"    "timestamp_osm_base": "2024-07-23T11:01:29Z","#,
        r#"    "timestamp_areas_base": "2024-07-23T10:14:46Z","#,
        r#"    "copyright": "The data included in this document is from www.openstreetmap.org. The data is made available under ODbL.""#,
        r#"  },"#,
        r#"  "elements": ["#,
        r#""#,
        r#"{"#,
        r#"  "type": "node","#,
        r#"  "id": 1244739647,"#,
        r#"  "lat": 45.8308094,"#,
        r#"  "lon": 9.3355621,"#,
        r#"  "tags": {"#,
        r#"    "capacity": "28","#,
        r#"    "name": "Rifugio S.E.V.","#,
        r#"    "operator": "Società Escursionisti Valmadrerese","#,
        r#"    "tourism": "alpine_hut""#,
        r#"  }"#,
        r#"},"#,
        r#"{"#,
        r#"  "type": "node","#,
        r#"  "id": 2658226584,"#,
        r#"  "lat": 46.0466531,"#,
        r#"  "lon": 10.3583596,"#,
        r#"  "tags": {"#,
        r#"    "beds": "9","#,
        r#"    "name": "Bivacco Festa","#,
        r#"    "shelter_type": "basic_hut""#,
        r#"  }"#,
        r#"},"#,
        r#"{ "type": "node", "id": 3201843490, "lat": 45.9154866, "lon": 9.5095784 },"#,
        r#"{"#,
        r#"  "type": "way","#,
        r#"  "id": 201184835,"#,
        r#"  "bounds": { "minlat": 46.0791943, "minlon": 9.3005334, "maxlat": 46.0793629, "maxlon": 9.3007556 },"#,
        r#"  "nodes": [2111885890, 2111885894, 2111885895, 2111885890],"#,
        r#"  "geometry": ["#,
        r#"    { "lat": 46.0791943, "lon": 9.3005334 },"#,
        r#"    { "lat": 46.0792480, "lon": 9.3007556 },"#,
        r#"    { "lat": 46.0793629, "lon": 9.3006107 },"#,
        r#"    { "lat": 46.0791943, "lon": 9.3005334 }"#,
        r#"  ],"#,
        r#"  "tags": {"#,
        r#"    "building": "yes","#,
        r#"    "name": "Rifugio Bellasca","#,
        r#"    "tourism": "alpine_hut""#,
        r#"  }"#,
        r#"},"#,
        r#"{"#,
        r#"  "type": "relation","#,
        r#"  "id": 10579225,"#,
        r#"  "bounds": { "minlat": 45.9998423, "minlon": 9.2711957, "maxlat": 46.0001506, "maxlon": 9.2716252 },"#,
        r#"  "members": ["#,
        r#"    {"#,
        r#"      "type": "way","#,
        r#"      "ref": 780979068,"#,
        r#"      "role": "outer","#,
        r#"      "geometry": ["#,
        r#"        { "lat": 45.9998423, "lon": 9.2711957 },"#,
        r#"        { "lat": 46.0001506, "lon": 9.2716252 }"#,
        r#"      ]"#,
        r#"    }"#,
        r#"  ],"#,
        r#"  "tags": {"#,
        r#"    "name": "Rifugio Menaggio","#,
        r#"    "tourism": "alpine_hut","#,
        r#"    "type": "multipolygon""#,
        r#"  }"#,
        r#"}"#,
        r#""#,
        r#"  ]"#,
        r#"}"#,
    ]
}

pub fn get_test_marker(lat: f64, lon: f64, name: &str) -> ShelterMarker {
    ShelterMarker {
        position: Point::new(lon, lat),
        info: ShelterInfo {
            name: Some(name.to_string()),
            ..Default::default()
        },
    }
}
