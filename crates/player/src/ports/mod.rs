//! Ports - Interfaces between the form session and the outside world

pub mod outbound;
