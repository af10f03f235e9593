//! Stops (component A).

/// A single location vehicles call at or passengers walk between.
///
/// Identity is a stable string id; everything else is a descriptive
/// attribute. Immutable after construction - there is no setter, only the
/// accessors below.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    id: String,
    code: String,
    name: String,
    easting: f64,
    northing: f64,
    is_station: bool,
    parent_station_id: Option<String>,
}

impl Stop {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
        easting: f64,
        northing: f64,
        is_station: bool,
        parent_station_id: Option<String>,
    ) -> Self {
        Stop {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            easting,
            northing,
            is_station,
            parent_station_id,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    pub fn is_station(&self) -> bool {
        self.is_station
    }

    pub fn parent_station_id(&self) -> Option<&str> {
        self.parent_station_id.as_deref()
    }
}
