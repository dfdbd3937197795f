/// UI layer: panel layout, pages, charts, and the data table.

pub mod pages;
pub mod panels;
pub mod plot;
pub mod table;
