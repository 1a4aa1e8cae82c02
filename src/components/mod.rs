//! UI Components
//!
//! View-model building blocks shared by the pages.

pub mod card;
pub mod chart;
pub mod nav;

pub use card::{Card, CardBody, LinkRow, Page, Row};
pub use chart::{allocation_chart, market_pulse_demo, ChartPoint, LineChart, PieChart, PieSegment};
pub use nav::{Tab, TabParseError};
