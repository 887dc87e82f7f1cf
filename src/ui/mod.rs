//! Rendering layer: sidebar filter widgets, tables, and bar charts.

pub mod charts;
pub mod panels;
pub mod table;
