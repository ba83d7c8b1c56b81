use geo::Point;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomBounds {
    pub minlat: f64,
    pub minlon: f64,
    pub maxlat: f64,
    pub maxlon: f64,
}

impl GeomBounds {
    pub fn min_corner(&self) -> Point<f64> {
        Point::new(self.minlon, self.minlat)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShelterElement {
    pub kind: ElementKind,
    pub id: Option<u64>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub bounds: Option<GeomBounds>,
    pub tags: HashMap<String, String>,
}
