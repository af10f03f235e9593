use thiserror::Error;

/// Failures raised while reading a feed directory and assembling it into a
/// [`crate::model::TimetableContainer`].
#[derive(Error, Debug)]
pub enum LoadingError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("stop_times.txt references unknown trip {trip_id}")]
    UnknownTrip { trip_id: String },

    #[error(transparent)]
    Timetable(#[from] crate::TimetableError),
}
