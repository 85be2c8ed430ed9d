//! Raw form submission.

use serde::{Deserialize, Serialize};

use crate::core::domain::CategoryField;

/// The seven categorical selections and the departure date, exactly as
/// submitted. Nothing is validated until the input is encoded.
///
/// Missing fields deserialize to the empty string, i.e. "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionInput {
    pub airline: String,
    pub source_city: String,
    pub departure_time: String,
    pub stops: String,
    pub arrival_time: String,
    pub destination_city: String,
    #[serde(rename = "class")]
    pub travel_class: String,
    /// ISO `YYYY-MM-DD`
    pub departure_date: String,
}

impl PredictionInput {
    /// Submitted value of a categorical field.
    pub fn value(&self, field: CategoryField) -> &str {
        match field {
            CategoryField::Airline => &self.airline,
            CategoryField::SourceCity => &self.source_city,
            CategoryField::DepartureTime => &self.departure_time,
            CategoryField::Stops => &self.stops,
            CategoryField::ArrivalTime => &self.arrival_time,
            CategoryField::DestinationCity => &self.destination_city,
            CategoryField::TravelClass => &self.travel_class,
        }
    }
}
