//! Categorical encoding tables for the fare model.
//!
//! The integer codes were assigned by the training pipeline and are neither
//! alphabetical nor derivable from the names, so every table is spelled out.
//! Source and destination cities share names but not codes.
//!
//! # Examples
//!
//! ```
//! use flight_fare::core::domain::{encode, CategoryField};
//!
//! assert_eq!(encode(CategoryField::Airline, "Vistara").unwrap(), 5);
//! assert_eq!(encode(CategoryField::SourceCity, "Mumbai").unwrap(), 3);
//! assert_eq!(encode(CategoryField::DestinationCity, "Mumbai").unwrap(), 2);
//! assert!(encode(CategoryField::Airline, "").is_err());
//! ```

use serde::Serialize;
use std::fmt;

use super::error::{FareError, FareResult};

define_category!(
    /// Operating airline.
    Airline {
        SpiceJet => ("SpiceJet", 3, "SpiceJet"),
        AirAsia => ("AirAsia", 0, "AirAsia"),
        Vistara => ("Vistara", 5, "Vistara"),
        GoFirst => ("GO_FIRST", 2, "GO_FIRST"),
        Indigo => ("Indigo", 1, "Indigo"),
        AirIndia => ("Air_India", 4, "Air India"),
    }
);

define_category!(
    /// City the flight departs from.
    SourceCity {
        Delhi => ("Delhi", 0, "Delhi"),
        Mumbai => ("Mumbai", 3, "Mumbai"),
        Bangalore => ("Bangalore", 2, "Bangalore"),
        Kolkata => ("Kolkata", 4, "Kolkata"),
        Hyderabad => ("Hyderabad", 1, "Hyderabad"),
        Chennai => ("Chennai", 5, "Chennai"),
    }
);

define_category!(
    /// City the flight lands in.
    DestinationCity {
        Delhi => ("Delhi", 0, "Delhi"),
        Mumbai => ("Mumbai", 2, "Mumbai"),
        Bangalore => ("Bangalore", 3, "Bangalore"),
        Kolkata => ("Kolkata", 5, "Kolkata"),
        Hyderabad => ("Hyderabad", 1, "Hyderabad"),
        Chennai => ("Chennai", 4, "Chennai"),
    }
);

define_category!(
    /// Time-of-day bucket, shared by departure and arrival.
    TimeOfDay {
        Evening => ("Evening", 3, "Evening"),
        EarlyMorning => ("Early_Morning", 0, "Early Morning"),
        Morning => ("Morning", 1, "Morning"),
        Afternoon => ("Afternoon", 2, "Afternoon"),
        Night => ("Night", 4, "Night"),
        LateNight => ("Late_Night", 5, "Late Night"),
    }
);

define_category!(
    /// Number of intermediate stops.
    Stops {
        Zero => ("zero", 0, "Zero"),
        One => ("one", 1, "One"),
        TwoOrMore => ("two_or_more", 2, "Two or More"),
    }
);

define_category!(
    /// Cabin class.
    TravelClass {
        Economy => ("Economy", 0, "Economy"),
        Business => ("Business", 1, "Business"),
    }
);

impl TimeOfDay {
    /// Presentation order of the arrival-time selector.
    pub const ARRIVAL_ORDER: &'static [TimeOfDay] = &[
        TimeOfDay::Night,
        TimeOfDay::Morning,
        TimeOfDay::EarlyMorning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::LateNight,
    ];
}

/// A categorical field of the fare form.
///
/// The declaration order is the order the fields occupy in the feature
/// vector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryField {
    Airline,
    SourceCity,
    DepartureTime,
    Stops,
    ArrivalTime,
    DestinationCity,
    #[serde(rename = "class")]
    TravelClass,
}

/// One selectable value of a categorical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
    pub code: u8,
}

macro_rules! options_of {
    ($variants:expr) => {
        $variants
            .iter()
            .map(|v| CategoryOption {
                value: v.as_str(),
                label: v.label(),
                code: v.code(),
            })
            .collect()
    };
}

impl CategoryField {
    pub const ALL: [CategoryField; 7] = [
        CategoryField::Airline,
        CategoryField::SourceCity,
        CategoryField::DepartureTime,
        CategoryField::Stops,
        CategoryField::ArrivalTime,
        CategoryField::DestinationCity,
        CategoryField::TravelClass,
    ];

    /// Name of the field as submitted by the form.
    pub fn form_name(&self) -> &'static str {
        match self {
            CategoryField::Airline => "airline",
            CategoryField::SourceCity => "source_city",
            CategoryField::DepartureTime => "departure_time",
            CategoryField::Stops => "stops",
            CategoryField::ArrivalTime => "arrival_time",
            CategoryField::DestinationCity => "destination_city",
            CategoryField::TravelClass => "class",
        }
    }

    /// Human-readable field title.
    pub fn title(&self) -> &'static str {
        match self {
            CategoryField::Airline => "Airline",
            CategoryField::SourceCity => "Source City",
            CategoryField::DepartureTime => "Departure Time",
            CategoryField::Stops => "Stops",
            CategoryField::ArrivalTime => "Arrival Time",
            CategoryField::DestinationCity => "Destination City",
            CategoryField::TravelClass => "Class",
        }
    }

    /// Accepted values in presentation order.
    pub fn options(&self) -> Vec<CategoryOption> {
        match self {
            CategoryField::Airline => options_of!(Airline::ALL),
            CategoryField::SourceCity => options_of!(SourceCity::ALL),
            CategoryField::DepartureTime => options_of!(TimeOfDay::ALL),
            CategoryField::Stops => options_of!(Stops::ALL),
            CategoryField::ArrivalTime => options_of!(TimeOfDay::ARRIVAL_ORDER),
            CategoryField::DestinationCity => options_of!(DestinationCity::ALL),
            CategoryField::TravelClass => options_of!(TravelClass::ALL),
        }
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

/// Map a submitted value to its trained integer code.
///
/// Lookup is exact and case-sensitive. Values outside the field's table,
/// including the empty "nothing selected" value, are rejected.
pub fn encode(field: CategoryField, value: &str) -> FareResult<u8> {
    let code = match field {
        CategoryField::Airline => Airline::lookup(value).map(|v| v.code()),
        CategoryField::SourceCity => SourceCity::lookup(value).map(|v| v.code()),
        CategoryField::DepartureTime | CategoryField::ArrivalTime => {
            TimeOfDay::lookup(value).map(|v| v.code())
        }
        CategoryField::Stops => Stops::lookup(value).map(|v| v.code()),
        CategoryField::DestinationCity => DestinationCity::lookup(value).map(|v| v.code()),
        CategoryField::TravelClass => TravelClass::lookup(value).map(|v| v.code()),
    };

    code.ok_or_else(|| FareError::InvalidCategory {
        field,
        value: value.to_string(),
    })
}
