pub mod kpi_import;
pub mod reality_check;
pub mod runs;
