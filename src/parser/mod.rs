pub mod yahoo_parser;

pub use yahoo_parser::parse_chart;
