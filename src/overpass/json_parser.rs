use std::{
    collections::HashMap,
    num::{ParseFloatError, ParseIntError},
    str::Utf8Error,
};

use json_tools::{Buffer, BufferType, Lexer, TokenType};

use crate::map_data::element::{ElementKind, GeomBounds, ShelterElement};

#[derive(Debug, PartialEq, Clone, thiserror::Error)]
pub enum OverpassJsonParserError {
    #[error("Unexpected token {token:?} in context: {context}")]
    UnexpectedToken { token: TokenType, context: String },

    #[error("Failed to parse UTF-8: {error}")]
    Utf8ParseError { error: Utf8Error },

    #[error("Unexpected buffer type")]
    UnexpectedBuffer,

    #[error("Array found in root context")]
    ArrayFoundInRoot,

    #[error("Failed to parse element ID: {error}")]
    FailedToParseElementId { error: ParseIntError },

    #[error("Failed to parse latitude: {error}")]
    FailedToParseLat { error: ParseFloatError },

    #[error("Failed to parse longitude: {error}")]
    FailedToParseLon { error: ParseFloatError },

    #[error("Failed to parse bounds value '{key}': {error}")]
    FailedToParseBounds { key: String, error: ParseFloatError },

    #[error("Unknown element kind: {kind}")]
    UnknownElementKind { kind: String },

    #[error("Missing element kind for element: {element:?}")]
    MissingElementKind { element: RawElement },

    #[error("Parser in error state: {error}")]
    ParserInErrorState {
        error: Box<OverpassJsonParserError>,
    },
}

#[derive(Debug, PartialEq, Clone)]
pub struct RawElement {
    kind: Option<ElementKind>,
    id: Option<u64>,
    lat: Option<f64>,
    lon: Option<f64>,
    minlat: Option<f64>,
    minlon: Option<f64>,
    maxlat: Option<f64>,
    maxlon: Option<f64>,
    tags: Option<HashMap<String, String>>,
}

impl RawElement {
    fn new() -> Self {
        Self {
            kind: None,
            id: None,
            lat: None,
            lon: None,
            minlat: None,
            minlon: None,
            maxlat: None,
            maxlon: None,
            tags: None,
        }
    }

    fn into_element(self) -> Result<ShelterElement, OverpassJsonParserError> {
        let kind = match self.kind {
            Some(kind) => kind,
            None => return Err(OverpassJsonParserError::MissingElementKind { element: self }),
        };
        let bounds = match (self.minlat, self.minlon, self.maxlat, self.maxlon) {
            (Some(minlat), Some(minlon), Some(maxlat), Some(maxlon)) => Some(GeomBounds {
                minlat,
                minlon,
                maxlat,
                maxlon,
            }),
            _ => None,
        };
        Ok(ShelterElement {
            kind,
            id: self.id,
            lat: self.lat,
            lon: self.lon,
            bounds,
            tags: self.tags.unwrap_or_default(),
        })
    }
}

#[derive(Debug, PartialEq)]
enum ParserStateLocation {
    InObject(Option<String>),
    InList(String),
}

#[derive(Debug)]
pub struct OverpassJsonParser {
    location: Vec<ParserStateLocation>,
    prev_key: Option<String>,
    prev_string: Option<String>,
    current_element: Option<RawElement>,
    prev_error: Option<OverpassJsonParserError>,
}

impl OverpassJsonParser {
    pub fn new() -> Self {
        Self {
            location: Vec::new(),
            prev_key: None,
            prev_string: None,
            current_element: None,
            prev_error: None,
        }
    }

    pub fn parse_line(
        &mut self,
        line: Vec<u8>,
    ) -> Result<Vec<ShelterElement>, OverpassJsonParserError> {
        let parse_result = self.parse_line_internal(line);
        if let Err(error) = parse_result {
            match error {
                OverpassJsonParserError::ParserInErrorState { error: _ } => {}
                _ => self.prev_error = Some(error.clone()),
            };
            return Err(error);
        }
        parse_result
    }

    fn parse_line_internal(
        &mut self,
        line: Vec<u8>,
    ) -> Result<Vec<ShelterElement>, OverpassJsonParserError> {
        if let Some(error) = &self.prev_error {
            return Err(OverpassJsonParserError::ParserInErrorState {
                error: Box::new(error.clone()),
            });
        }
        let mut elements = Vec::new();
        for token in Lexer::new(line, BufferType::Bytes(0)) {
            if token.kind == TokenType::BracketOpen {
                self.set_bracket_open()?;
            }
            if token.kind == TokenType::BracketClose {
                self.set_bracket_close()?;
            }
            if token.kind == TokenType::CurlyOpen {
                self.set_curly_open()?;
            }
            if token.kind == TokenType::CurlyClose {
                let element = self.set_curly_close()?;
                if let Some(element) = element {
                    elements.push(element);
                }
            }

            if token.kind == TokenType::Colon {
                self.prev_key = self.prev_string.take();
            }
            if token.kind == TokenType::Comma {
                self.prev_string = None;
            }
            if token.kind == TokenType::String || token.kind == TokenType::Number {
                if let Buffer::MultiByte(buf) = token.buf {
                    let val = std::str::from_utf8(&buf.to_owned())
                        .map_err(|error| OverpassJsonParserError::Utf8ParseError { error })?
                        .to_string()
                        .replace("\"", "");

                    if self.prev_key.is_some() {
                        self.check_update_current_element(&val)?;
                        self.prev_key = None;
                    }
                    self.prev_string = Some(val);
                } else {
                    return Err(OverpassJsonParserError::UnexpectedBuffer);
                }
            }
        }

        Ok(elements)
    }

    fn check_update_current_element(&mut self, val: &str) -> Result<(), OverpassJsonParserError> {
        if self.prev_string.is_none() {
            if let Some(key) = self.prev_key.clone() {
                if self.is_in_elements_obj() {
                    if let Some(ref mut current_element) = self.current_element {
                        match key.as_str() {
                            "type" => match val {
                                "node" => current_element.kind = Some(ElementKind::Node),
                                "way" => current_element.kind = Some(ElementKind::Way),
                                "relation" => current_element.kind = Some(ElementKind::Relation),
                                _ => {
                                    return Err(OverpassJsonParserError::UnknownElementKind {
                                        kind: val.to_string(),
                                    });
                                }
                            },
                            "id" => {
                                let id = val.parse::<u64>().map_err(|error| {
                                    OverpassJsonParserError::FailedToParseElementId { error }
                                })?;
                                current_element.id = Some(id)
                            }
                            "lat" => {
                                let lat = val.parse::<f64>().map_err(|error| {
                                    OverpassJsonParserError::FailedToParseLat { error }
                                })?;
                                current_element.lat = Some(lat)
                            }
                            "lon" => {
                                let lon = val.parse::<f64>().map_err(|error| {
                                    OverpassJsonParserError::FailedToParseLon { error }
                                })?;
                                current_element.lon = Some(lon)
                            }
                            _ => {}
                        }
                    }
                } else if self.is_in_tags_obj() {
                    if let Some(ref mut current_element) = self.current_element {
                        if current_element.tags.is_none() {
                            current_element.tags = Some(HashMap::new());
                        }
                        if let Some(ref mut tags) = current_element.tags {
                            tags.insert(key, val.to_string());
                        }
                    }
                } else if self.is_in_bounds_obj() {
                    if let Some(ref mut current_element) = self.current_element {
                        let parse_bound = |val: &str| {
                            val.parse::<f64>().map_err(|error| {
                                OverpassJsonParserError::FailedToParseBounds {
                                    key: key.clone(),
                                    error,
                                }
                            })
                        };
                        match key.as_str() {
                            "minlat" => current_element.minlat = Some(parse_bound(val)?),
                            "minlon" => current_element.minlon = Some(parse_bound(val)?),
                            "maxlat" => current_element.maxlat = Some(parse_bound(val)?),
                            "maxlon" => current_element.maxlon = Some(parse_bound(val)?),
                            _ => {}
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn set_bracket_open(&mut self) -> Result<(), OverpassJsonParserError> {
        if let Some(key) = &self.prev_key {
            self.location
                .push(ParserStateLocation::InList(key.to_string()));
            return Ok(());
        }

        Err(OverpassJsonParserError::ArrayFoundInRoot)
    }

    fn set_bracket_close(&mut self) -> Result<(), OverpassJsonParserError> {
        if let Some(loc) = self.location.last() {
            if let ParserStateLocation::InList(_) = *loc {
                self.location.pop();
            } else {
                return Err(OverpassJsonParserError::UnexpectedToken {
                    token: TokenType::BracketClose,
                    context: String::from("not in a list"),
                });
            }
        }
        Ok(())
    }

    fn set_curly_open(&mut self) -> Result<(), OverpassJsonParserError> {
        self.location
            .push(ParserStateLocation::InObject(self.prev_key.clone()));
        if self.current_element.is_none() && self.is_in_elements_obj() {
            self.current_element = Some(RawElement::new());
        }
        self.prev_key = None;
        self.prev_string = None;
        Ok(())
    }

    fn set_curly_close(&mut self) -> Result<Option<ShelterElement>, OverpassJsonParserError> {
        if let Some(loc) = self.location.last() {
            if let ParserStateLocation::InObject(loc_key) = loc {
                self.prev_key = loc_key.clone();
                self.location.pop();
            } else {
                return Err(OverpassJsonParserError::UnexpectedToken {
                    token: TokenType::CurlyClose,
                    context: String::from("not in a object"),
                });
            }
        }
        self.prev_string = None;

        if self.is_in_elements_list() {
            if let Some(element) = self.current_element.take() {
                return element.into_element().map(Some);
            }
        }

        Ok(None)
    }

    fn is_in_elements_list(&self) -> bool {
        if let Some(ParserStateLocation::InObject(None)) = self.location.first() {
            if let Some(ParserStateLocation::InList(key)) = self.location.get(1) {
                if key == "elements" && self.location.len() == 2 {
                    return true;
                }
            }
        }

        false
    }

    fn is_in_elements_obj(&self) -> bool {
        if let Some(ParserStateLocation::InObject(None)) = self.location.first() {
            if let Some(ParserStateLocation::InList(list_key)) = self.location.get(1) {
                if let Some(ParserStateLocation::InObject(Some(obj_key))) = self.location.last() {
                    if list_key == "elements" && obj_key == "elements" && self.location.len() == 3 {
                        return true;
                    }
                }
            }
        }

        false
    }

    fn is_in_tags_obj(&self) -> bool {
        if let Some(ParserStateLocation::InObject(None)) = self.location.first() {
            if let Some(ParserStateLocation::InList(list_key)) = self.location.get(1) {
                if list_key == "elements" {
                    if let Some(ParserStateLocation::InObject(Some(obj_key))) = self.location.get(2)
                    {
                        if obj_key == "elements" {
                            if let Some(ParserStateLocation::InObject(Some(obj_key))) =
                                self.location.last()
                            {
                                if obj_key == "tags" && self.location.len() == 4 {
                                    return true;
                                }
                            }
                        }
                    }
                }
            }
        }

        false
    }

    fn is_in_bounds_obj(&self) -> bool {
        if let Some(ParserStateLocation::InObject(None)) = self.location.first() {
            if let Some(ParserStateLocation::InList(list_key)) = self.location.get(1) {
                if list_key == "elements" {
                    if let Some(ParserStateLocation::InObject(Some(obj_key))) = self.location.get(2)
                    {
                        if obj_key == "elements" {
                            if let Some(ParserStateLocation::InObject(Some(obj_key))) =
                                self.location.last()
                            {
                                if obj_key == "bounds" && self.location.len() == 4 {
                                    return true;
                                }
                            }
                        }
                    }
                }
            }
        }

        false
    }
}
